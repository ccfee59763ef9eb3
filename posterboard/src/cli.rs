use std::path::PathBuf;

use clap::Parser;
use posterboard_core::Settings;

/// Poster Board: belajar persatuan di lingkungan sekolah
#[derive(Parser, Debug)]
#[command(name = "posterboard")]
#[command(about = "Terminal lesson on unity (Persatuan) at school")]
#[command(version)]
pub struct Cli {
    /// Settings file to read instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mute all sound cues
    #[arg(long)]
    pub no_sound: bool,

    /// Directory holding the poster images
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over the settings file
    pub fn apply(&self, settings: &mut Settings) {
        if self.no_sound {
            settings.sound = false;
        }
        if let Some(assets) = &self.assets {
            settings.assets_dir = assets.clone();
        }
        if let Some(log_file) = &self.log_file {
            settings.log_file = Some(log_file.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from(["posterboard", "--no-sound", "--assets", "/srv/poster"]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);
        assert!(!settings.sound);
        assert_eq!(settings.assets_dir, PathBuf::from("/srv/poster"));
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let cli = Cli::parse_from(["posterboard"]);
        let mut settings = Settings {
            fps: 60,
            ..Settings::default()
        };
        cli.apply(&mut settings);
        assert_eq!(settings.fps, 60);
        assert!(settings.sound);
    }
}
