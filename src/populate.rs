//! Populate command runner.

use anyhow::Context;
use fixture_generator::FixtureGenerator;
use fixture_populate::{
    mask_connection_password, populate_fixture, CommonPopulateArgs, DryRunLoader, FixtureLoader,
    FixtureReport, PopulateOptions,
};
use fixture_populate_mysql::MySQLLoader;
use fixture_populate_postgresql::PostgreSQLLoader;

use crate::PopulateTarget;

/// Generator and driver options resolved from the command line.
pub(crate) struct PopulateRun {
    pub generator: FixtureGenerator,
    pub options: PopulateOptions,
}

impl PopulateRun {
    /// Resolve profile, seed, reference date and table selection.
    pub fn from_args(args: &CommonPopulateArgs) -> anyhow::Result<Self> {
        let profile = args.load_profile().with_context(|| match &args.profile {
            Some(path) => format!("Failed to load fixture profile from {path:?}"),
            None => "Invalid fixture profile".to_string(),
        })?;
        let seed = args.resolve_seed(&profile);
        let reference = args.resolve_reference_date()?;
        let tables = args.selected_tables()?;

        let options = PopulateOptions {
            tables,
            batch_size: profile.batch_size,
            verify_counts: !args.skip_verify,
        };
        let generator = FixtureGenerator::new(profile, seed, reference)
            .context("Failed to set up the fixture generator")?;

        Ok(Self { generator, options })
    }

    /// Load every selected table through `loader` and print the report.
    pub async fn execute<L: FixtureLoader>(&self, loader: &mut L) -> anyhow::Result<FixtureReport> {
        let backend = loader.backend();
        tracing::info!(
            "Populating {} with {} rows (seed={}, reference date={}, batch size={})",
            backend,
            self.options
                .tables
                .iter()
                .map(|t| self.generator.profile().row_count(*t))
                .sum::<u64>(),
            self.generator.seed(),
            self.generator.reference(),
            self.options.batch_size
        );

        let report = populate_fixture(loader, &self.generator, &self.options)
            .await
            .with_context(|| format!("Failed to populate {backend}"))?;

        for (kind, count) in report.defects().iter() {
            if report.table(kind.table()).is_some() {
                tracing::info!("  {}: {} rows", kind.label(), count);
            }
        }
        tracing::info!(
            "Fixture complete: {} rows across {} tables",
            report.total_rows(),
            report.tables.len()
        );
        println!("{}", report.format_table());

        Ok(report)
    }
}

/// Run populate command to fill the target database with the fixture.
pub(crate) async fn run_populate(target: PopulateTarget) -> anyhow::Result<()> {
    match target {
        PopulateTarget::PostgreSQL { args } => {
            let run = PopulateRun::from_args(&args.common)?;
            let connection_string = args.connection_string();
            let mut loader = PostgreSQLLoader::connect(&connection_string)
                .await
                .with_context(|| {
                    format!(
                        "Failed to connect to PostgreSQL at {}",
                        mask_connection_password(&connection_string)
                    )
                })?;
            run.execute(&mut loader).await?;
        }
        PopulateTarget::MySQL { args } => {
            let run = PopulateRun::from_args(&args.common)?;
            let opts = args
                .opts()
                .with_context(|| format!("Invalid MySQL connection {}", args.display_target()))?;
            let mut loader = MySQLLoader::connect(opts)
                .await
                .with_context(|| format!("Failed to connect to MySQL at {}", args.display_target()))?;
            let result = run.execute(&mut loader).await;
            let closed = loader.disconnect().await;
            close_after_run(result, closed, "MySQL")?;
        }
        PopulateTarget::DryRun { args } => {
            let run = PopulateRun::from_args(&args)?;
            tracing::info!("[DRY-RUN] Generating rows without a database");
            let mut loader = DryRunLoader::new();
            run.execute(&mut loader).await?;
        }
    }

    Ok(())
}

/// Combine a run's outcome with the outcome of closing its connection.
///
/// The run error wins; a close failure after a failed run is only logged.
pub(crate) fn close_after_run<T, E>(
    result: anyhow::Result<T>,
    closed: Result<(), E>,
    backend: &str,
) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match (result, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => {
            Err(anyhow::Error::new(e).context(format!("Failed to disconnect from {backend}")))
        }
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close)) => {
            tracing::warn!("Failed to disconnect from {}: {}", backend, close);
            Err(e)
        }
    }
}

/// The profile the populate commands would use, seed included, as YAML.
pub(crate) fn effective_profile_yaml(args: &CommonPopulateArgs) -> anyhow::Result<String> {
    let mut profile = args.load_profile().context("Invalid fixture profile")?;
    profile.seed = Some(args.resolve_seed(&profile));
    profile
        .to_yaml()
        .context("Failed to serialize fixture profile")
}
