use std::env;
use std::num::NonZeroUsize;
use std::thread;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuInfo {
    pub index: usize,
    pub model: Option<String>,
}

/// One entry per logical CPU. Model names are filled in where the platform exposes them.
pub fn cpus() -> Vec<CpuInfo> {
    let count = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    let models = cpu_models();
    (0..count)
        .map(|index| CpuInfo {
            index,
            model: models.get(index).cloned(),
        })
        .collect()
}

#[cfg(target_os = "linux")]
fn cpu_models() -> Vec<String> {
    std::fs::read_to_string("/proc/cpuinfo")
        .map(|info| parse_cpu_models(&info))
        .unwrap_or_default()
}

#[cfg(not(target_os = "linux"))]
fn cpu_models() -> Vec<String> {
    Vec::new()
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_cpu_models(cpuinfo: &str) -> Vec<String> {
    cpuinfo
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            (key.trim() == "model name").then(|| value.trim().to_string())
        })
        .collect()
}

/// Login name of the user running the process.
pub fn login_name() -> Option<String> {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|key| env::var(key).ok().filter(|v| !v.is_empty()))
}

pub fn architecture() -> &'static str {
    env::consts::ARCH
}
