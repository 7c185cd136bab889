use molpack::engine::config::PackingConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub output_path: PathBuf,
    pub xyz_path: Option<PathBuf>,
    pub bonds_path: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
    pub elements_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub core_config: PackingConfig,
}
