use crate::{
    error::{Result, error::LocalisationSnafu},
    report::ReportWriter,
    settings::Settings,
};
use fishing_ranges::FileAdapter;
use localisation_core::{LocalisationSettings, ReportInbound, evaluate_localisation};
use snafu::ResultExt;
use tracing::{info, instrument};

pub struct App {
    adapter: FileAdapter,
    writer: ReportWriter,
    settings: LocalisationSettings,
}

impl App {
    pub fn build(settings: &Settings) -> App {
        App {
            adapter: FileAdapter::new(settings.adapter_settings()),
            writer: ReportWriter::new(settings.dest_path.clone(), settings.report_format),
            settings: settings.localisation_settings(),
        }
    }

    #[instrument(skip_all)]
    pub async fn run(self) -> Result<()> {
        let report = evaluate_localisation(
            &self.adapter,
            &self.adapter,
            &self.adapter,
            &self.settings,
        )
        .await
        .context(LocalisationSnafu)?;

        info!("dumping localisation");
        self.writer
            .write_report(&report)
            .await
            .context(LocalisationSnafu)?;

        Ok(())
    }
}
