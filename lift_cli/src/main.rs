use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lift_core::profile::{ProfilePaths, ProfileSettings};
use lift_core::*;
use lift_core::{plan, report};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "lift")]
#[command(about = "Muscle-balanced workout planner and training log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Profile whose data to use
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Treat this date (YYYYMMDD) as today
    #[arg(long, global = true)]
    today: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick today's exercises for a split, least-trained muscles first
    Today {
        /// Split category (chest_triceps, back_biceps, shoulders_abs, legs)
        #[arg(long)]
        split: String,

        /// Number of exercises (default from config)
        #[arg(long)]
        count: Option<usize>,

        /// Show the selection without recording muscle hits
        #[arg(long)]
        dry_run: bool,
    },

    /// Save a finished session: --entry "NAME@WEIGHT:reps,reps,..."
    Log {
        #[arg(long = "entry", required = true)]
        entries: Vec<String>,

        /// Session date (YYYYMMDD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the session logged on a date
    Show {
        #[arg(long)]
        date: Option<String>,
    },

    /// Reps per muscle (or volume per exercise) over a trailing window
    Summary {
        /// Trailing week (default)
        #[arg(long, conflicts_with_all = ["monthly", "days"])]
        weekly: bool,

        /// Trailing month
        #[arg(long, conflicts_with = "days")]
        monthly: bool,

        /// Custom window length in days
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
        days: Option<i64>,

        /// Also write the summary as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Summarize weight × reps per exercise instead
        #[arg(long, conflicts_with = "adjustments")]
        volume: bool,

        /// Count readiness adjustments over recent sessions instead
        #[arg(long, conflicts_with_all = ["weekly", "monthly", "days", "csv"])]
        adjustments: bool,
    },

    /// Weight and reps of one exercise on every day it was logged
    Trend {
        #[arg(long)]
        exercise: String,
    },

    /// Show accumulated muscle hit counts
    Hits,

    /// Zero all muscle hit counts to start a new cycle
    Reset,

    /// Label a date (e.g. "Deload week")
    Tag {
        #[arg(long)]
        label: String,

        #[arg(long)]
        date: Option<String>,
    },

    /// List cycle labels
    Tags,

    /// Manage profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Daily readiness check (each score 1-10)
    Readiness {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        sleep: u8,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        stress: u8,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        soreness: u8,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        rpe: u8,

        /// Date to record the check for (YYYYMMDD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Rest timer countdown between sets
    Rest {
        #[arg(long)]
        seconds: Option<u32>,
    },

    /// List catalog exercises and the muscles they target
    Catalog {
        #[arg(long)]
        split: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Create a new profile
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        age: u8,
        /// Height as feet'inches, e.g. 5'10
        #[arg(long)]
        height: String,
        /// Body weight in lbs
        #[arg(long)]
        weight: u32,
        #[arg(long, default_value = "Other")]
        gender: String,
        /// strength, hypertrophy, endurance or recomposition
        #[arg(long, default_value = "strength")]
        goal: String,
        #[arg(long, value_delimiter = ',')]
        equipment: Vec<String>,
    },

    /// List profiles
    List,

    /// Check a profile's password
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },

    /// Show the active profile
    Show,

    /// Update the active profile's settings
    Settings {
        #[arg(long)]
        password: String,
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        coaching: Option<bool>,
        #[arg(long)]
        warmup: Option<bool>,
        #[arg(long)]
        rest_interval: Option<u32>,
    },

    /// Manage the active profile's own exercises
    Exercise {
        #[command(subcommand)]
        action: ExerciseAction,
    },
}

#[derive(Subcommand)]
enum ExerciseAction {
    /// Add an exercise to the selection pool
    Add {
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        /// Split category (chest_triceps, back_biceps, shoulders_abs, legs)
        #[arg(long)]
        split: String,
        #[arg(long, value_delimiter = ',', required = true)]
        muscles: Vec<String>,
        #[arg(long, default_value_t = 3)]
        sets: u32,
        #[arg(long, default_value_t = 10)]
        reps: u32,
        /// Weight in lbs, Bodyweight or Seconds
        #[arg(long, default_value = "Bodyweight")]
        load: String,
        #[arg(long, value_delimiter = ',')]
        equipment: Vec<String>,
    },

    /// Remove one of the profile's exercises
    Remove {
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },

    /// List the profile's exercises
    List,
}

/// Resolved paths, config and date for one invocation
struct Context {
    config: Config,
    profiles: ProfileStore,
    profile_name: String,
    paths: ProfilePaths,
    today: NaiveDate,
}

impl Context {
    fn active_profile(&self) -> Result<Option<Profile>> {
        self.profiles.load(&self.profile_name)
    }

    /// The configured catalog plus the profile's own exercises
    fn catalog(&self, profile: Option<&Profile>) -> Result<Catalog> {
        let base = self.config.catalog()?;
        Ok(match profile {
            Some(p) => p.catalog(&base),
            None => base,
        })
    }

    fn log_store(&self) -> SessionLogStore {
        SessionLogStore::new(&self.paths.logs)
    }

    /// `--date` if given, otherwise today
    fn date_or_today(&self, date: Option<&str>) -> Result<NaiveDate> {
        match date {
            Some(key) => parse_date_key(key),
            None => Ok(self.today),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    lift_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data.data_dir.clone());
    let profile_name = cli
        .profile
        .clone()
        .unwrap_or_else(|| config.data.default_profile.clone());

    let clock: Box<dyn Clock> = match &cli.today {
        Some(key) => Box::new(FixedClock(parse_date_key(key)?)),
        None => Box::new(SystemClock),
    };

    tracing::debug!("Data dir {:?}, profile '{}'", data_dir, profile_name);
    let profiles = ProfileStore::new(&data_dir);
    let ctx = Context {
        paths: profiles.paths(&profile_name)?,
        profiles,
        profile_name,
        today: clock.today(),
        config,
    };

    match cli.command {
        Commands::Today {
            split,
            count,
            dry_run,
        } => cmd_today(&ctx, &split, count, dry_run),
        Commands::Log { entries, date } => cmd_log(&ctx, &entries, date.as_deref()),
        Commands::Show { date } => cmd_show(&ctx, date.as_deref()),
        Commands::Summary {
            weekly: _,
            monthly,
            days,
            csv,
            volume,
            adjustments,
        } => {
            if adjustments {
                return cmd_adjustments(&ctx);
            }
            let window = match (monthly, days) {
                (true, _) => SummaryWindow::Monthly,
                (false, Some(n)) => SummaryWindow::Days(n),
                (false, None) => SummaryWindow::Weekly,
            };
            cmd_summary(&ctx, window, csv, volume)
        }
        Commands::Trend { exercise } => cmd_trend(&ctx, &exercise),
        Commands::Hits => cmd_hits(&ctx),
        Commands::Reset => cmd_reset(&ctx),
        Commands::Tag { label, date } => cmd_tag(&ctx, &label, date.as_deref()),
        Commands::Tags => cmd_tags(&ctx),
        Commands::Profile { action } => cmd_profile(&ctx, action),
        Commands::Readiness {
            sleep,
            stress,
            soreness,
            rpe,
            date,
        } => cmd_readiness(
            &ctx,
            Readiness {
                sleep,
                stress,
                soreness,
                rpe,
            },
            date.as_deref(),
        ),
        Commands::Rest { seconds } => cmd_rest(&ctx, seconds),
        Commands::Catalog { split } => cmd_catalog(&ctx, split.as_deref()),
    }
}

fn cmd_today(ctx: &Context, split: &str, count: Option<usize>, dry_run: bool) -> Result<()> {
    let profile = ctx.active_profile()?;
    let catalog = match &profile {
        Some(p) => p.training_catalog(&ctx.config.catalog()?),
        None => ctx.config.catalog()?,
    };
    let k = count.unwrap_or(ctx.config.selection.exercises_per_day);

    let split = match split.parse::<SplitCategory>() {
        Ok(split) => split,
        Err(_) => {
            eprintln!("Unknown split: {}. Nothing selected.", split);
            println!("No exercises selected.");
            return Ok(());
        }
    };

    let mut accumulator = MuscleHitAccumulator::load(&ctx.paths.accumulator)?;
    let chosen: Vec<Exercise> = if dry_run {
        rank(split, &accumulator, &catalog)
            .into_iter()
            .take(k)
            .map(|r| r.exercise)
            .collect()
    } else {
        select(split, k, &mut accumulator, &catalog)
    };

    if chosen.is_empty() {
        println!("No exercises selected.");
        return Ok(());
    }

    let planned: Vec<PlannedExercise> = chosen
        .iter()
        .map(|e| plan_exercise(e, profile.as_ref()))
        .collect();
    display_plan(split, &planned, &catalog);

    if dry_run {
        println!("\n[Dry run - muscle hits not recorded]");
        return Ok(());
    }

    accumulator.save(&ctx.paths.accumulator)?;
    println!("\n✓ Muscle hits recorded");
    Ok(())
}

fn display_plan(split: SplitCategory, planned: &[PlannedExercise], catalog: &Catalog) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  TODAY: {}", split);
    println!("╰─────────────────────────────────────────╯");
    println!();

    for p in planned {
        println!("  {}", p.exercise.name);
        println!("    → {} × {} @ {}", p.sets, p.reps, p.load);
        println!(
            "    → Targets: {}",
            catalog.muscles.muscles_for(&p.exercise.name).join(", ")
        );
    }
}

/// Parse `NAME@WEIGHT:r1,r2,...`
fn parse_entry(raw: &str) -> Result<(String, String, Vec<u32>)> {
    let invalid = |why: &str| Error::InvalidEntry(format!("'{}': {}", raw, why));

    let (head, reps) = raw
        .rsplit_once(':')
        .ok_or_else(|| invalid("expected NAME@WEIGHT:reps,..."))?;
    let (name, weight) = head
        .rsplit_once('@')
        .ok_or_else(|| invalid("missing @WEIGHT"))?;

    let name = name.trim();
    let weight = weight.trim();
    if name.is_empty() {
        return Err(invalid("empty exercise name"));
    }
    if weight.is_empty() {
        return Err(invalid("empty weight"));
    }

    let reps = reps
        .split(',')
        .map(|r| r.trim().parse::<u32>().map_err(|_| invalid("reps must be whole numbers")))
        .collect::<Result<Vec<u32>>>()?;

    Ok((name.to_string(), weight.to_string(), reps))
}

fn cmd_log(ctx: &Context, entries: &[String], date: Option<&str>) -> Result<()> {
    let date = ctx.date_or_today(date)?;
    let profile = ctx.active_profile()?;
    let catalog = ctx.catalog(profile.as_ref())?;
    let store = ctx.log_store();

    let mut draft = SessionDraft::new(date);
    for raw in entries {
        let (name, weight, reps) = parse_entry(raw)?;
        if catalog.find(&name).is_none() {
            eprintln!("Note: '{}' is not in the catalog; it won't count toward muscle totals.", name);
        }
        draft.set_weight(&name, weight);
        for r in reps {
            draft.record_set(&name, r);
        }
    }

    let (date, log) = draft.finish();
    let previous = store.load(date)?;
    if !previous.is_empty() {
        println!("Replacing the session already logged for {}", date_key(date));
    }
    store.save(date, &log)?;

    for (name, entry) in &log.exercises {
        match entry.numeric_weight() {
            Some(w) => println!(
                "  {}: {} sets, {} reps, volume {:.1} lbs",
                name,
                entry.sets.len(),
                entry.total_reps(),
                plan::volume(w, entry.total_reps())
            ),
            None => println!(
                "  {}: {} sets, {} reps ({})",
                name,
                entry.sets.len(),
                entry.total_reps(),
                entry.weight
            ),
        }
    }

    if let Some(mut profile) = profile {
        // A day progresses each exercise once, however often it is re-logged
        for name in log.exercises.keys() {
            if previous.exercises.contains_key(name) {
                tracing::info!("{} already progressed for {}", name, date_key(date));
                continue;
            }
            let default_load = catalog.find(name).map(|e| e.default_load);
            plan::advance_weight(&mut profile, name, default_load);
        }
        ctx.profiles.save(&profile)?;
    }

    println!("\n✓ Session logged for {}", date_key(date));
    Ok(())
}

fn cmd_show(ctx: &Context, date: Option<&str>) -> Result<()> {
    let date = ctx.date_or_today(date)?;
    let log = ctx.log_store().load(date)?;
    let tags = CycleTags::load(&ctx.paths.cycle_tags)?;

    if let Some(label) = tags.get(date) {
        println!("[{}]", label);
    }

    if log.is_empty() {
        println!("No session logged for {}", date_key(date));
        return Ok(());
    }

    println!("Session {}", date_key(date));
    for (name, entry) in &log.exercises {
        let reps: Vec<String> = entry.sets.iter().map(|s| s.reps_done.to_string()).collect();
        println!("  {} @ {}: {}", name, entry.weight, reps.join(", "));
    }
    Ok(())
}

fn cmd_summary(
    ctx: &Context,
    window: SummaryWindow,
    csv: Option<PathBuf>,
    volume: bool,
) -> Result<()> {
    let days = window.days(&ctx.config.summary);
    let store = ctx.log_store();

    if volume {
        let volumes = volume_by_exercise(days, ctx.today, &store)?;
        println!("Volume per exercise, last {} days (through {})", days, ctx.today);
        if volumes.is_empty() {
            println!("No weighted sets logged in the last {} days.", days);
        }
        for line in report::render_volume_bars(&volumes) {
            println!("  {}", line);
        }
        if let Some(path) = csv {
            let rows = report::write_volume_csv(&path, &volumes)?;
            println!("✓ Wrote {} rows to {}", rows, path.display());
        }
        return Ok(());
    }

    let catalog = ctx.catalog(ctx.active_profile()?.as_ref())?;
    let summary = summarize(days, ctx.today, &store, &catalog.muscles)?;
    println!("Reps per muscle, last {} days (through {})", days, ctx.today);
    if summary.is_empty() {
        println!("No logged sets in the last {} days.", days);
    }
    for line in report::render_muscle_bars(&summary) {
        println!("  {}", line);
    }
    if let Some(path) = csv {
        let rows = report::write_muscle_csv(&path, &summary)?;
        println!("✓ Wrote {} rows to {}", rows, path.display());
    }
    Ok(())
}

fn cmd_adjustments(ctx: &Context) -> Result<()> {
    let sessions = ctx.config.summary.adjustment_sessions;
    let adjustments = AdjustmentLog::load(&ctx.paths.adjustments)?;
    let counts = adjustment_counts(sessions, &ctx.log_store(), &adjustments)?;

    println!("Adjustments over the last {} sessions", sessions);
    if counts.total() == 0 {
        println!("No sessions logged yet.");
        return Ok(());
    }
    for line in report::render_adjustments(&counts) {
        println!("  {}", line);
    }
    Ok(())
}

fn cmd_trend(ctx: &Context, exercise: &str) -> Result<()> {
    let points = exercise_trend(exercise, &ctx.log_store())?;
    if points.is_empty() {
        println!("No sessions logged for {}", exercise);
        return Ok(());
    }

    println!("{} over time", exercise);
    for line in report::render_trend(&points) {
        println!("  {}", line);
    }
    Ok(())
}

fn cmd_hits(ctx: &Context) -> Result<()> {
    let accumulator = MuscleHitAccumulator::load(&ctx.paths.accumulator)?;
    if accumulator.is_empty() {
        println!("No muscle hits recorded yet.");
        return Ok(());
    }

    println!("Muscle hits since last reset:");
    for (muscle, hits) in accumulator.iter() {
        println!("  {:<12} {}", muscle, hits);
    }
    Ok(())
}

fn cmd_reset(ctx: &Context) -> Result<()> {
    MuscleHitAccumulator::update(&ctx.paths.accumulator, |acc| {
        acc.reset();
        Ok(())
    })?;
    println!("✓ Muscle hit counts reset");
    Ok(())
}

fn cmd_tag(ctx: &Context, label: &str, date: Option<&str>) -> Result<()> {
    let date = ctx.date_or_today(date)?;
    let mut tags = CycleTags::load(&ctx.paths.cycle_tags)?;
    tags.tag(date, label);
    tags.save(&ctx.paths.cycle_tags)?;
    println!("✓ Tagged {} as '{}'", date_key(date), label);
    Ok(())
}

fn cmd_tags(ctx: &Context) -> Result<()> {
    let tags = CycleTags::load(&ctx.paths.cycle_tags)?;
    if tags.is_empty() {
        println!("No cycle tags.");
    }
    for (date, label) in tags.iter() {
        println!("  {}  {}", date, label);
    }
    Ok(())
}

fn cmd_profile(ctx: &Context, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Create {
            name,
            email,
            password,
            age,
            height,
            weight,
            gender,
            goal,
            equipment,
        } => {
            let profile = ctx.profiles.create(NewProfile {
                name,
                email,
                password,
                age,
                height,
                weight_lbs: weight,
                gender,
                goal: goal.parse()?,
                equipment,
            })?;
            println!("✓ Profile '{}' created.", profile.name);
        }

        ProfileAction::List => {
            let names = ctx.profiles.list()?;
            if names.is_empty() {
                println!("No profiles yet.");
            }
            for name in names {
                println!("  {}", name);
            }
        }

        ProfileAction::Login { name, password } => {
            let profile = ctx.profiles.login(&name, &password)?;
            println!("Welcome back, {}!", profile.name);
        }

        ProfileAction::Show => {
            let profile = ctx
                .active_profile()?
                .ok_or_else(|| Error::Profile(format!("No profile named '{}'", ctx.profile_name)))?;
            println!("Name:      {}", profile.name);
            println!("Goal:      {:?}", profile.goal);
            println!("Age:       {}", profile.age);
            println!(
                "Height:    {}'{}",
                profile.height_inches / 12,
                profile.height_inches % 12
            );
            println!("Weight:    {} lbs", profile.weight_lbs);
            println!("Equipment: {}", profile.equipment.join(", "));
            print_settings(&profile.settings);
            for (exercise, weight) in &profile.exercise_weights {
                println!("  {} → {:.1} lbs", exercise, weight);
            }
        }

        ProfileAction::Settings {
            password,
            theme,
            coaching,
            warmup,
            rest_interval,
        } => {
            let mut profile = ctx.profiles.login(&ctx.profile_name, &password)?;
            if let Some(theme) = theme {
                profile.settings.theme = theme;
            }
            if let Some(coaching) = coaching {
                profile.settings.coaching = coaching;
            }
            if let Some(warmup) = warmup {
                profile.settings.warmup = warmup;
            }
            if let Some(seconds) = rest_interval {
                profile.settings.rest_interval_seconds = Some(seconds);
            }
            ctx.profiles.save(&profile)?;
            println!("✓ Settings saved.");
            print_settings(&profile.settings);
        }

        ProfileAction::Exercise { action } => cmd_profile_exercise(ctx, action)?,
    }
    Ok(())
}

fn cmd_profile_exercise(ctx: &Context, action: ExerciseAction) -> Result<()> {
    match action {
        ExerciseAction::Add {
            password,
            name,
            split,
            muscles,
            sets,
            reps,
            load,
            equipment,
        } => {
            let mut profile = ctx.profiles.login(&ctx.profile_name, &password)?;
            let record = CatalogRecord {
                name: name.trim().to_string(),
                split: split.parse()?,
                default_sets: sets,
                default_reps: reps,
                default_load: load.parse()?,
                muscles: muscles.iter().map(|m| m.trim().to_string()).collect(),
                equipment: equipment.iter().map(|e| e.trim().to_string()).collect(),
            };
            let added = record.name.clone();
            profile.add_custom_exercise(record, &ctx.config.catalog()?)?;
            ctx.profiles.save(&profile)?;
            println!("✓ Added '{}' to {}'s exercises.", added, profile.name);
        }

        ExerciseAction::Remove { password, name } => {
            let mut profile = ctx.profiles.login(&ctx.profile_name, &password)?;
            if !profile.remove_custom_exercise(&name) {
                return Err(Error::Profile(format!(
                    "'{}' is not one of {}'s exercises",
                    name, profile.name
                )));
            }
            ctx.profiles.save(&profile)?;
            println!("✓ Removed '{}'.", name);
        }

        ExerciseAction::List => {
            let profile = ctx
                .active_profile()?
                .ok_or_else(|| Error::Profile(format!("No profile named '{}'", ctx.profile_name)))?;
            if profile.custom_exercises.is_empty() {
                println!("No custom exercises.");
            }
            for e in &profile.custom_exercises {
                println!(
                    "  {:<24} {:<14} {} × {} @ {:<12} → {}",
                    e.name,
                    e.split.as_str(),
                    e.default_sets,
                    e.default_reps,
                    e.default_load.to_string(),
                    e.muscles.join(", ")
                );
            }
        }
    }
    Ok(())
}

fn print_settings(settings: &ProfileSettings) {
    println!("Theme:     {}", settings.theme);
    println!("Coaching:  {}", settings.coaching);
    println!("Warm-up:   {}", settings.warmup);
    if let Some(seconds) = settings.rest_interval_seconds {
        println!("Rest:      {}s", seconds);
    }
}

fn cmd_readiness(ctx: &Context, readiness: Readiness, date: Option<&str>) -> Result<()> {
    let date = ctx.date_or_today(date)?;
    let level = plan::adjust_level(&readiness);

    let mut adjustments = AdjustmentLog::load(&ctx.paths.adjustments)?;
    adjustments.record(date, level);
    adjustments.save(&ctx.paths.adjustments)?;

    match level {
        AdjustLevel::Reduce => println!("⚠ Scale down intensity today."),
        AdjustLevel::Boost => println!("✓ Great recovery - you can push a bit harder."),
        AdjustLevel::None => println!("Train as planned."),
    }
    Ok(())
}

fn cmd_rest(ctx: &Context, seconds: Option<u32>) -> Result<()> {
    let seconds = match seconds {
        Some(s) => s,
        None => ctx
            .active_profile()?
            .and_then(|p| p.settings.rest_interval_seconds)
            .unwrap_or(ctx.config.training.rest_interval_seconds),
    };

    println!("Resting for {} seconds...", seconds);
    let mut stdout = io::stdout();
    for remaining in (1..=seconds).rev() {
        print!("\r⏱ {:>3}s remaining", remaining);
        stdout.flush()?;
        std::thread::sleep(Duration::from_secs(1));
    }
    println!("\r✓ Rest complete!      ");
    Ok(())
}

fn cmd_catalog(ctx: &Context, split: Option<&str>) -> Result<()> {
    let catalog = ctx.catalog(ctx.active_profile()?.as_ref())?;
    let filter = split.map(str::parse::<SplitCategory>).transpose()?;

    for exercise in &catalog.exercises {
        if filter.is_some_and(|s| s != exercise.split) {
            continue;
        }
        println!(
            "  {:<24} {:<14} {} × {} @ {:<12} → {}",
            exercise.name,
            exercise.split.as_str(),
            exercise.default_sets,
            exercise.default_reps,
            exercise.default_load.to_string(),
            catalog.muscles.muscles_for(&exercise.name).join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        let (name, weight, reps) = parse_entry("Barbell Squat@135:10,9, 8").unwrap();
        assert_eq!(name, "Barbell Squat");
        assert_eq!(weight, "135");
        assert_eq!(reps, [10, 9, 8]);
    }

    #[test]
    fn test_parse_entry_non_numeric_weight() {
        let (name, weight, reps) = parse_entry("Pull-ups@Bodyweight:8").unwrap();
        assert_eq!(name, "Pull-ups");
        assert_eq!(weight, "Bodyweight");
        assert_eq!(reps, [8]);
    }

    #[test]
    fn test_parse_entry_rejects_malformed() {
        assert!(parse_entry("Squat:10").is_err());
        assert!(parse_entry("Squat@135").is_err());
        assert!(parse_entry("@135:10").is_err());
        assert!(parse_entry("Squat@135:ten").is_err());
        assert!(parse_entry("Squat@135:").is_err());
    }
}
