//! Data Loader: raw series files to a derived health report

use std::path::{Path, PathBuf};
use sysgraph_common::{Result, SysGraphError};
use tracing::{debug, info, instrument};

use crate::history::{HealthReport, MetricHistory};
use crate::series::parse_series;

/// File names the external collector writes into the data directory
const NUM_CORES_FILE: &str = "numCores.txt";
const CPU_LOAD_FILE: &str = "cpuLoad.txt";
const CPU_TEMP_FILE: &str = "cpuTemp.txt";
const MEM_FREE_FILE: &str = "memFree.txt";
const MEM_TOTAL_FILE: &str = "memTotal.txt";
const DISTRO_NAME_FILE: &str = "distroName.txt";

/// Reads the collector's series files and derives the report metrics
///
/// The data directory is an explicit construction parameter; the loader has
/// no other configuration and no side effects beyond file reads.
#[derive(Debug, Clone)]
pub struct MetricsLoader {
    data_dir: PathBuf,
}

impl MetricsLoader {
    /// Create a loader over the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory this loader reads from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the raw series, derive `{ram, cpu, temp}` and their averages
    ///
    /// Fails fast on the first missing or malformed file, on any series
    /// length that prevents element-wise combination, and on empty input.
    #[instrument(skip(self), fields(data_dir = %self.data_dir.display()))]
    pub fn load(&self) -> Result<HealthReport> {
        let num_cores = self.read_series(NUM_CORES_FILE)?;
        let cpu_load = self.read_series(CPU_LOAD_FILE)?;
        let cpu_temp = self.read_series(CPU_TEMP_FILE)?;
        let mem_free = self.read_series(MEM_FREE_FILE)?;
        let mem_total = self.read_series(MEM_TOTAL_FILE)?;
        let distro = self.read_label(DISTRO_NAME_FILE)?;

        let size = cpu_load.len();
        if size == 0 {
            return Err(SysGraphError::empty_data(CPU_LOAD_FILE));
        }

        // The four sampled series must align exactly by index.
        for (name, series) in [
            (CPU_TEMP_FILE, &cpu_temp),
            (MEM_FREE_FILE, &mem_free),
            (MEM_TOTAL_FILE, &mem_total),
        ] {
            if series.len() != size {
                return Err(SysGraphError::shape_mismatch(name, size, series.len()));
            }
        }

        // A fixed core count may be recorded once and broadcast.
        if num_cores.len() != size && num_cores.len() != 1 {
            return Err(SysGraphError::shape_mismatch(
                NUM_CORES_FILE,
                size,
                num_cores.len(),
            ));
        }
        let cores_at = |i: usize| {
            if num_cores.len() == 1 {
                num_cores[0]
            } else {
                num_cores[i]
            }
        };

        let mut ram = Vec::with_capacity(size);
        let mut cpu = Vec::with_capacity(size);
        let mut temp = Vec::with_capacity(size);

        for i in 0..size {
            if mem_total[i] == 0.0 {
                return Err(SysGraphError::data_at(
                    format!("Total memory sample {i} is zero"),
                    self.data_dir.join(MEM_TOTAL_FILE),
                ));
            }
            let cores = cores_at(i);
            if cores == 0.0 {
                return Err(SysGraphError::data_at(
                    format!("Core count sample {i} is zero"),
                    self.data_dir.join(NUM_CORES_FILE),
                ));
            }

            ram.push((1.0 - mem_free[i] / mem_total[i]) * 100.0);
            cpu.push(cpu_load[i] / cores * 100.0);
            temp.push(cpu_temp[i] / 1000.0);
        }

        let history = MetricHistory::new(ram, cpu, temp);
        let averages = history.averages();

        info!(samples = size, distro = %distro, "Metric history derived");
        Ok(HealthReport {
            distro,
            history,
            averages,
        })
    }

    /// Read and parse one numeric series file
    fn read_series(&self, file: &str) -> Result<Vec<f64>> {
        let path = self.data_dir.join(file);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SysGraphError::Data {
                message: format!("Failed to read series file {}", path.display()),
                path: Some(path.clone()),
                source: Some(Box::new(e)),
            }
        })?;
        let series = parse_series(&content, &path)?;
        debug!(file, samples = series.len(), "Series loaded");
        Ok(series)
    }

    /// Read the distribution label file
    fn read_label(&self, file: &str) -> Result<String> {
        let path = self.data_dir.join(file);
        let content = std::fs::read_to_string(&path).map_err(|e| SysGraphError::Data {
            message: format!("Failed to read label file {}", path.display()),
            path: Some(path.clone()),
            source: Some(Box::new(e)),
        })?;

        let label = content.trim();
        if label.is_empty() {
            return Err(SysGraphError::data_at("Distribution label is empty", path));
        }
        Ok(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Write a full fixture set; individual files can be overwritten after.
    fn write_fixtures(dir: &Path) {
        fs::write(dir.join(NUM_CORES_FILE), "4\n4\n4\n").unwrap();
        fs::write(dir.join(CPU_LOAD_FILE), "1.0\n2.0\n3.0\n").unwrap();
        fs::write(dir.join(CPU_TEMP_FILE), "45000\n46000\n47000\n").unwrap();
        fs::write(dir.join(MEM_FREE_FILE), "2048000\n1024000\n3072000\n").unwrap();
        fs::write(dir.join(MEM_TOTAL_FILE), "4096000\n4096000\n4096000\n").unwrap();
        fs::write(dir.join(DISTRO_NAME_FILE), "Debian\n").unwrap();
    }

    #[test]
    fn test_load_derives_all_metrics() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());

        let report = MetricsLoader::new(dir.path()).load().unwrap();

        assert_eq!(report.distro, "Debian");
        assert_eq!(report.history.size, 3);
        assert_eq!(report.history.ram, vec![50.0, 75.0, 25.0]);
        assert_eq!(report.history.cpu, vec![25.0, 50.0, 75.0]);
        assert_eq!(report.history.temp, vec![45.0, 46.0, 47.0]);
    }

    #[test]
    fn test_averages_match_series_means() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());

        let report = MetricsLoader::new(dir.path()).load().unwrap();

        assert!((report.averages.ram - 50.0).abs() < 1e-9);
        assert!((report.averages.cpu - 50.0).abs() < 1e-9);
        assert!((report.averages.temp - 46.0).abs() < 1e-9);
    }

    #[test]
    fn test_spec_scenario_cpu_two_cores() {
        // cpuLoad=[50,50], numCores=[2,2] -> cpu=[25,25], avg 25.0
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(CPU_LOAD_FILE), "50\n50\n").unwrap();
        fs::write(dir.path().join(NUM_CORES_FILE), "2\n2\n").unwrap();
        fs::write(dir.path().join(CPU_TEMP_FILE), "45000\n45000\n").unwrap();
        fs::write(dir.path().join(MEM_FREE_FILE), "1\n1\n").unwrap();
        fs::write(dir.path().join(MEM_TOTAL_FILE), "2\n2\n").unwrap();

        let report = MetricsLoader::new(dir.path()).load().unwrap();
        assert_eq!(report.history.cpu, vec![25.0, 25.0]);
        assert!((report.averages.cpu - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_spec_scenario_ram_half_used() {
        // memFree=[2048000], memTotal=[4096000] -> ram=[50.0]
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(CPU_LOAD_FILE), "1.0\n").unwrap();
        fs::write(dir.path().join(NUM_CORES_FILE), "4\n").unwrap();
        fs::write(dir.path().join(CPU_TEMP_FILE), "45000\n").unwrap();
        fs::write(dir.path().join(MEM_FREE_FILE), "2048000\n").unwrap();
        fs::write(dir.path().join(MEM_TOTAL_FILE), "4096000\n").unwrap();

        let report = MetricsLoader::new(dir.path()).load().unwrap();
        assert_eq!(report.history.ram, vec![50.0]);
        assert!((report.averages.ram - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_scalar_core_count_broadcasts() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(NUM_CORES_FILE), "4\n").unwrap();

        let report = MetricsLoader::new(dir.path()).load().unwrap();
        assert_eq!(report.history.cpu, vec![25.0, 50.0, 75.0]);
    }

    #[test]
    fn test_derived_values_stay_in_range() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());

        let report = MetricsLoader::new(dir.path()).load().unwrap();
        for v in report.history.ram.iter().chain(report.history.cpu.iter()) {
            assert!(*v >= 0.0 && *v <= 100.0);
        }
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::remove_file(dir.path().join(MEM_FREE_FILE)).unwrap();

        let result = MetricsLoader::new(dir.path()).load();
        assert!(matches!(result, Err(SysGraphError::Data { .. })));
    }

    #[test]
    fn test_malformed_file_fails() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(CPU_TEMP_FILE), "45000\nnot-a-number\n47000\n").unwrap();

        let result = MetricsLoader::new(dir.path()).load();
        assert!(matches!(result, Err(SysGraphError::Data { .. })));
    }

    #[test]
    fn test_length_mismatch_fails() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(MEM_FREE_FILE), "2048000\n1024000\n").unwrap();

        let result = MetricsLoader::new(dir.path()).load();
        match result {
            Err(SysGraphError::ShapeMismatch {
                series,
                expected,
                actual,
            }) => {
                assert_eq!(series, MEM_FREE_FILE);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_core_count_mismatch_fails() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(NUM_CORES_FILE), "4\n4\n").unwrap();

        let result = MetricsLoader::new(dir.path()).load();
        assert!(matches!(result, Err(SysGraphError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_empty_series_fails() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(CPU_LOAD_FILE), "").unwrap();

        let result = MetricsLoader::new(dir.path()).load();
        assert!(matches!(result, Err(SysGraphError::EmptyData { .. })));
    }

    #[test]
    fn test_zero_total_memory_fails() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(MEM_TOTAL_FILE), "4096000\n0\n4096000\n").unwrap();

        let result = MetricsLoader::new(dir.path()).load();
        assert!(matches!(result, Err(SysGraphError::Data { .. })));
    }

    #[test]
    fn test_empty_label_fails() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(DISTRO_NAME_FILE), "\n").unwrap();

        let result = MetricsLoader::new(dir.path()).load();
        assert!(matches!(result, Err(SysGraphError::Data { .. })));
    }

    #[test]
    fn test_label_is_trimmed() {
        let dir = tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(DISTRO_NAME_FILE), "  Ubuntu 24.04 LTS \n").unwrap();

        let report = MetricsLoader::new(dir.path()).load().unwrap();
        assert_eq!(report.distro, "Ubuntu 24.04 LTS");
    }
}
