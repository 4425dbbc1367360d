//! Command line for logpuzzle.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use logpuzzle::{read_urls, Downloader};

/// Extract puzzle image URLs from an Apache access log and optionally download them.
#[derive(Debug, Parser)]
#[command(name = "logpuzzle")]
pub struct Cli {
    /// Destination directory for downloaded images; without it the URLs are printed.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub todir: Option<PathBuf>,

    /// Apache log file to extract URLs from, named `<anything>_<hostname>`.
    pub logfile: PathBuf,
}

impl Cli {
    pub fn run(self, out: &mut impl Write) -> Result<()> {
        let urls = read_urls(&self.logfile)?;

        match self.todir {
            Some(dir) => {
                Downloader::new()
                    .download_images(&urls, &dir)
                    .with_context(|| format!("failed to build gallery in {}", dir.display()))?;
            }

            None => {
                for url in &urls {
                    writeln!(out, "{}", url)?;
                }
                out.flush()?;
            }
        }

        Ok(())
    }
}

/// One-line usage summary, as printed when no arguments are given.
pub fn usage() -> String {
    format!("{}\n", Cli::command().render_usage())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;

    use super::{usage, Cli};

    const LOG: &str = concat!(
        "GET /puzzle/p-aaa-abc.jpg HTTP/1.0\n",
        "GET /images/logo.jpg HTTP/1.0\n",
        "GET /puzzle/p-aaa-aaa.jpg HTTP/1.0\n",
        "GET /puzzle/p-aaa-abc.jpg HTTP/1.0\n",
    );

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_logfile_only() {
        let cli = parse(&["logpuzzle", "animal_code.google.com"]);

        assert_eq!(cli.logfile, PathBuf::from("animal_code.google.com"));
        assert_eq!(cli.todir, None);
    }

    #[test]
    fn test_parse_todir() {
        let short = parse(&["logpuzzle", "-d", "out", "animal_code.google.com"]);
        let long = parse(&["logpuzzle", "--todir", "out", "animal_code.google.com"]);

        assert_eq!(short.todir, Some(PathBuf::from("out")));
        assert_eq!(long.todir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_parse_requires_logfile() {
        assert!(Cli::try_parse_from(["logpuzzle", "-d", "out"]).is_err());
    }

    #[test]
    fn test_usage() {
        assert!(usage().contains("logpuzzle"));
        assert!(usage().contains("LOGFILE"));
    }

    #[test]
    fn test_run_prints_urls() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("animal_hostname.log");
        fs::write(&log, LOG).unwrap();

        let cli = parse(&["logpuzzle", log.to_str().unwrap()]);

        let mut out = Vec::<u8>::new();
        cli.run(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "http://hostname/puzzle/p-aaa-aaa.jpg\nhttp://hostname/puzzle/p-aaa-abc.jpg\n"
        );
    }

    #[test]
    fn test_run_empty_gallery() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("animal_hostname");
        fs::write(&log, "GET /index.html HTTP/1.0\n").unwrap();
        let dest = dir.path().join("gallery");

        let cli = parse(&[
            "logpuzzle",
            "--todir",
            dest.to_str().unwrap(),
            log.to_str().unwrap(),
        ]);

        let mut out = Vec::<u8>::new();
        cli.run(&mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(
            fs::read_to_string(dest.join("index.html")).unwrap(),
            "<html><body></body></html>"
        );
    }

    #[test]
    fn test_run_missing_log() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("animal_hostname");

        let cli = parse(&["logpuzzle", log.to_str().unwrap()]);

        let err = cli.run(&mut Vec::<u8>::new()).unwrap_err();

        assert!(format!("{:#}", err).contains("animal_hostname"));
    }
}
