//! The `apply` command: run one platform pass over a template project.

use tracing::{info, instrument};

use appize_adapters::{
    FileSplashResolver, HttpFetcher, LocalFilesystem, RasterEngine,
};
use appize_core::application::{AndroidModifier, DesktopModifier, PlatformReport};
use appize_core::domain::PackageId;
use appize_core::error::AppizeError;

use crate::cli::{ApplyArgs, GlobalArgs, Platform};
use crate::config::load_config;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

#[instrument(skip_all, fields(platform = %args.platform))]
pub fn execute(args: ApplyArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    if !args.project_root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!(
                "project root '{}' is not a directory",
                args.project_root.display()
            ),
        });
    }

    let config = load_config(&args.config, args.override_config.as_deref())?;

    // Validate the package identifier up front so a dry run catches the
    // same structural problems a real run would.
    PackageId::parse(&config.package_name).map_err(AppizeError::from)?;

    info!(
        app = %config.app_name,
        package = %config.package_name,
        "configuration loaded"
    );

    if args.dry_run {
        output.header(&format!(
            "Dry run: {} pass for '{}'",
            args.platform, config.app_name
        ))?;
        output.print(&format!("  project root: {}", args.project_root.display()))?;
        output.print(&format!("  assets root:  {}", args.assets.display()))?;
        output.print(&format!("  package:      {}", config.package_name))?;
        output.print("No files were written.")?;
        return Ok(());
    }

    let report = run_platform(&args, &config)?;
    output.report(&report)?;

    if report.failed_count() > 0 {
        // Step failures are fault-isolated and already reported above;
        // the pass itself still counts as completed.
        output.warning(&format!("{} step(s) failed", report.failed_count()))?;
    } else {
        output.success(&format!(
            "Applied '{}' to the {} project",
            config.app_name, args.platform
        ))?;
    }
    Ok(())
}

fn run_platform(
    args: &ApplyArgs,
    config: &appize_core::domain::ProjectConfig,
) -> CliResult<PlatformReport> {
    let report = match args.platform {
        Platform::Android => {
            let fetcher = HttpFetcher::new()?;
            let modifier = AndroidModifier::new(
                Box::new(LocalFilesystem::new()),
                Box::new(RasterEngine::new(Box::new(fetcher.clone()))),
                Box::new(FileSplashResolver::new(Box::new(fetcher))),
            );
            modifier.apply(config, &args.project_root, &args.assets)?
        }
        Platform::Desktop => {
            let modifier = DesktopModifier::new(Box::new(LocalFilesystem::new()));
            modifier.apply(config, &args.project_root, &args.assets)?
        }
    };
    Ok(report)
}
