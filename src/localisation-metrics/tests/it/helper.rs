use clap::Parser;
use localisation_metrics::{
    report::ReportFormat,
    settings::{Args, Settings},
    startup::App,
};
use std::ffi::OsString;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

pub const LABELS: &str = "mmsi,label,split
100,trawlers,Test
200,set_longlines,Test
300,cargo,Test
400,trawlers,Training
";

pub const FISHING_RANGES: &str = "mmsi,is_fishing,start_time,end_time
100,1,2016-01-01T00:00:00Z,2016-01-01T00:09:00Z
100,0,2016-01-01T00:10:00Z,2016-01-01T00:19:00Z
200,1,2016-01-01T00:00:00Z,2016-01-01T00:04:00Z
300,0,2016-01-01T00:00:00Z,2016-01-01T00:09:00Z
400,1,2016-01-01T00:00:00Z,2016-01-01T00:09:00Z
";

pub const INFERRED: &str = "vessel_id,start_time,end_time,nnet_score
100,2016-01-01 00:00:00,2016-01-01 00:19:00,0.8
200,2016-01-01 00:00:00,2016-01-01 00:04:00,0.2
400,2016-01-01 00:00:00,2016-01-01 00:09:00,0.8
";

pub struct TestHelper {
    pub temp_dir: TempDir,
}

impl TestHelper {
    pub fn new() -> TestHelper {
        TestHelper {
            temp_dir: tempdir().unwrap(),
        }
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn dest_path(&self) -> PathBuf {
        self.temp_dir.path().join("report")
    }

    pub fn settings(&self, format: ReportFormat) -> Settings {
        let inference = self.write("inferred.csv", INFERRED);
        let labels = self.write("labels.csv", LABELS);
        let ranges = self.write("fishing_ranges.csv", FISHING_RANGES);
        let dest = self.dest_path();

        let args: Vec<OsString> = vec![
            "localisation-metrics".into(),
            "--inference-path".into(),
            inference.into_os_string(),
            "--label-path".into(),
            labels.into_os_string(),
            "--fishing-ranges".into(),
            ranges.into_os_string(),
            "--dest-path".into(),
            dest.into_os_string(),
            "--format".into(),
            format.as_ref().into(),
        ];
        let args = Args::parse_from(args);

        Settings::new(&args).unwrap()
    }

    pub async fn run(&self, format: ReportFormat) -> String {
        let settings = self.settings(format);
        App::build(&settings).run().await.unwrap();
        std::fs::read_to_string(self.dest_path()).unwrap()
    }
}
