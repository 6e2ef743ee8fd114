use anyhow::Context;
use sym_config::SymConfig;
use sym_loader::{
    BulkLoader, LoadError, LoadObserver, LoadStep, LoaderOptions, LoaderPaths, TableReport,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoadArgs;
use crate::output::output;
use crate::progress::Progress;

/// Handle `symcheck load`.
///
/// Synchronizes the schema first so a fresh database can be loaded in one go.
/// A declined load (existing data, no `--allow-nonempty`) is not an error.
pub async fn handle(args: &LoadArgs, config: &SymConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = super::open_db(config).await?;
    db.sync_schema().await.context("failed to synchronize schema")?;

    let data_dir = args.data_dir.as_ref().unwrap_or(&config.loader.data_dir);
    let paths = LoaderPaths::in_dir(data_dir);
    let options = LoaderOptions {
        allow_nonempty: args.allow_nonempty || config.loader.allow_load_into_nonempty,
    };
    tracing::debug!(data_dir = %data_dir.display(), ?options, "starting bulk load");

    let outcome = BulkLoader::new(&db, options)
        .run(&paths, &mut StepSpinners::default())
        .await
        .map_err(|error| {
            let context = error
                .table()
                .map_or_else(|| "bulk load failed".to_string(), |t| format!("failed to load {t}"));
            anyhow::Error::new(error).context(context)
        })?;
    db.close();
    output(&outcome, flags.format)
}

/// One spinner per load step.
#[derive(Default)]
struct StepSpinners {
    current: Option<Progress>,
}

impl LoadObserver for StepSpinners {
    fn step_started(&mut self, step: LoadStep) {
        self.current = Some(Progress::spinner(&format!("Loading {}", step.table())));
    }

    fn step_finished(&mut self, step: LoadStep, result: Result<&TableReport, &LoadError>) {
        let Some(progress) = self.current.take() else {
            return;
        };
        match result {
            Ok(report) => progress.finish_ok(&format!(
                "{}: added {}, skipped {}",
                report.table, report.added, report.skipped
            )),
            Err(_) => progress.finish_err(&format!("{} rolled back", step.table())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_is_released_when_its_step_finishes() {
        let mut spinners = StepSpinners::default();
        spinners.step_started(LoadStep::Symptoms);
        assert!(spinners.current.is_some());

        let report = TableReport::new("symptoms", 2);
        spinners.step_finished(LoadStep::Symptoms, Ok(&report));
        assert!(spinners.current.is_none());
    }
}
