use fishing_ranges::{FileAdapter, FileAdapterSettings};
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

pub const LABELS: &str = "mmsi,label,split,length,tonnage,engine_power,crew_size
100,trawlers,Test,40,300,,
200,set_longlines,Test,,,,
300,cargo,Test,,,,
400,trawlers,Training,,,,
";

pub const FISHING_RANGES: &str = "mmsi,is_fishing,start_time,end_time
100,1,2016-01-01T00:00:00Z,2016-01-01T00:09:00Z
100,0,2016-01-01T00:10:00Z,2016-01-01T00:19:00Z
200,1,2016-01-01T00:00:00+00:00,2016-01-01T00:04:00.999999
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

    pub fn adapter(&self) -> FileAdapter {
        self.adapter_with_inferred("inferred.csv", INFERRED)
    }

    pub fn adapter_with_inferred(&self, name: &str, inferred: impl AsRef<[u8]>) -> FileAdapter {
        FileAdapter::new(FileAdapterSettings {
            fishing_ranges: self.write("fishing_ranges.csv", FISHING_RANGES),
            inference_path: self.write(name, inferred),
            label_path: self.write("labels.csv", LABELS),
            threshold: true,
        })
    }
}
