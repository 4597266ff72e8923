//! libcnb entry point.
//!
//! Adapts the detect and build pipelines to the Cloud Native Buildpacks
//! lifecycle contract.

use std::path::Path;

use libcnb::build::{BuildContext, BuildResult, BuildResultBuilder};
use libcnb::data::build_plan::{BuildPlan, BuildPlanBuilder, Require};
use libcnb::data::launch::{Launch, LaunchBuilder, Process, ProcessBuilder};
use libcnb::data::process_type;
use libcnb::detect::{DetectContext, DetectResult, DetectResultBuilder};
use libcnb::generic::{GenericMetadata, GenericPlatform};
use libcnb::{Buildpack, Env, Platform};
use tracing::{error, Level};

use crate::build::build;
use crate::config::{parse_log_level, Config, DetectOptions, LOG_LEVEL};
use crate::detect::{detect, DetectOutcome, Requirement};
use crate::error::YarnStartError;
use crate::launch::{LaunchProcess, ProcessKind};
use crate::logging;

/// The yarn-start buildpack.
pub struct YarnStartBuildpack;

impl YarnStartBuildpack {
    /// Detect settings of the shipped buildpack.
    pub fn detect_options(&self) -> DetectOptions {
        DetectOptions::default()
    }
}

impl Buildpack for YarnStartBuildpack {
    type Platform = GenericPlatform;
    type Metadata = GenericMetadata;
    type Error = YarnStartError;

    fn detect(&self, context: DetectContext<Self>) -> libcnb::Result<DetectResult, Self::Error> {
        match detect_plan(&context.app_dir, context.platform.env(), self.detect_options())? {
            Some(plan) => DetectResultBuilder::pass().build_plan(plan).build(),
            None => DetectResultBuilder::fail().build(),
        }
    }

    fn build(&self, context: BuildContext<Self>) -> libcnb::Result<BuildResult, Self::Error> {
        let info = &context.buildpack_descriptor.buildpack;
        let name = info.name.clone().unwrap_or_else(|| info.id.to_string());
        init_logging_from(context.platform.env());
        logging::title(&name, &info.version.to_string());

        let launch = build_launch(&context.app_dir, context.platform.env())?;

        BuildResultBuilder::new().launch(launch).build()
    }

    fn on_error(&self, error: libcnb::Error<Self::Error>) {
        // Errors can be raised before the configured level is known.
        logging::init_logging(Level::INFO);

        match error {
            libcnb::Error::BuildpackError(error) => error!("{error}"),
            other => error!("{other}"),
        }
    }
}

/// Run detection and translate the outcome into a build plan.
///
/// `None` means the buildpack does not apply to the app.
fn detect_plan(
    app_dir: &Path,
    env: &Env,
    options: DetectOptions,
) -> Result<Option<BuildPlan>, YarnStartError> {
    let config = load_config(env)?;

    match detect(app_dir, &config, options)? {
        DetectOutcome::Pass(requirements) => {
            let plan = requirements
                .iter()
                .map(to_require)
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .fold(BuildPlanBuilder::new(), |plan, require| plan.requires(require))
                .build();
            Ok(Some(plan))
        }
        DetectOutcome::Fail { .. } => Ok(None),
    }
}

/// Run the build pipeline and translate the launch plan into launch metadata.
fn build_launch(app_dir: &Path, env: &Env) -> Result<Launch, YarnStartError> {
    let config = load_config(env)?;

    let plan = build(app_dir, &config)?;
    logging::launch_processes(plan.processes());

    let processes: Vec<Process> = plan.into_processes().iter().map(to_process).collect();
    Ok(LaunchBuilder::new().processes(processes).build())
}

/// Install logging at the level named by `BP_LOG_LEVEL`.
///
/// Reads the raw value so that a subscriber exists even when the rest of the
/// configuration fails to parse.
fn init_logging_from(env: &Env) {
    let level = env
        .get(LOG_LEVEL)
        .map(|value| parse_log_level(&value.to_string_lossy()))
        .unwrap_or(Level::INFO);
    logging::init_logging(level);
}

/// Read configuration from the lifecycle environment and set up logging.
fn load_config(env: &Env) -> Result<Config, YarnStartError> {
    init_logging_from(env);
    Config::from_lookup(|key| {
        env.get(key)
            .map(|value| value.to_string_lossy().into_owned())
    })
}

fn to_require(requirement: &Requirement) -> Result<Require, YarnStartError> {
    let mut require = Require::new(requirement.name.clone());
    require
        .metadata(requirement.metadata)
        .map_err(|err| YarnStartError::PlanMetadata {
            name: requirement.name.clone(),
            message: err.to_string(),
        })?;
    Ok(require)
}

fn to_process(process: &LaunchProcess) -> Process {
    let kind = match process.kind {
        ProcessKind::Web => process_type!("web"),
        ProcessKind::NoReload => process_type!("no-reload"),
    };

    ProcessBuilder::new(kind, [process.command.clone()])
        .args(process.args.clone())
        .default(process.default)
        .build()
}
