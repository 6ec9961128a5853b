use std::path::PathBuf;

use clap::{crate_version, App, Arg, ArgMatches};
use log::info;

use crate::{config::Config, files, inline::Inliner, util::Fallible};

const DEFAULT_CONFIG: &str = "Amalgam.toml";

pub fn app() -> App<'static, 'static> {
    App::new("Amalgam")
        .version(crate_version!())
        .about("Amalgamates a header-only library into a single header\n\
                \n\
                Project headers are inlined recursively, starting from the entry header.\n\
                External includes are kept once, comments and include guards are stripped.")
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("config_file")
            .help("Sets the config file name")
            .takes_value(true)
            .default_value(DEFAULT_CONFIG))
        .arg(Arg::with_name("root")
            .short("r")
            .long("root")
            .value_name("root")
            .help("Root directory. If none is specified, uses 'paths' -> 'root' from config file. Default: current directory.")
            .takes_value(true))
        .arg(Arg::with_name("output")
            .short("o")
            .long("output")
            .value_name("file")
            .help("Path to the output file, relative to the root. If none is specified, uses 'paths' -> 'output' from config file. Default: single/rest.hpp")
            .takes_value(true))
}

/// Generates the single header, returns the path of the written file.
pub fn run_with_args(matches: &ArgMatches) -> Fallible<PathBuf> {
    let config_path = matches.value_of("config").unwrap_or(DEFAULT_CONFIG);
    let mut config = if matches.occurrences_of("config") == 0 && !PathBuf::from(config_path).exists()
    {
        Config::default()
    } else {
        Config::read(config_path)
            .map_err(|err| format!("Could not read config file \"{}\": {}", config_path, err))?
    };

    if let Some(root) = matches.value_of("root") {
        config.paths.root = Some(PathBuf::from(root));
    }
    if let Some(output) = matches.value_of("output") {
        config.paths.output = PathBuf::from(output);
    }

    let root = config
        .paths
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    if !root.is_dir() {
        return Err(format!("Root \"{}\" is not a directory", root.display()).into());
    }

    let license = files::read_file_string(root.join(&config.paths.license))
        .map_err(|err| format!("Could not load license: {}", err))?;

    let mut inliner = Inliner::new(&root, &config.project)?;

    let output = root.join(&config.paths.output);
    let mut out = files::create_output(&output)?;
    inliner.run(&config.paths.entry, &license, &mut out)?;

    info!("Wrote {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("rest")).unwrap();
        fs::write(dir.path().join("LICENSE.txt"), "MIT License\n").unwrap();
        fs::write(
            dir.path().join("rest.hpp"),
            "#ifndef REST_HPP\n#define REST_HPP\n#include <rest/server.hpp>\n#endif // REST_HPP\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("rest").join("server.hpp"),
            "#include <map>\nclass server {};\n",
        )
        .unwrap();
        dir
    }

    fn run(args: &[&str]) -> Fallible<PathBuf> {
        let mut argv = vec!["amalgam"];
        argv.extend_from_slice(args);
        let matches = app().get_matches_from(argv);
        run_with_args(&matches)
    }

    fn arg(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn writes_default_output() {
        let dir = project();

        let output = run(&["-r", arg(dir.path())]).unwrap();
        assert_eq!(output, dir.path().join("single/rest.hpp"));

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("// MIT License\n// This file was generated with a script.\n"));
        assert!(text.contains("// beginning of rest/server.hpp\n\n#include <map>\nclass server {};\n"));
        assert!(!text.contains("REST_HPP"));
        assert!(text.ends_with("// end of rest.hpp\n\n#endif // REST_SINGLE_INCLUDE_HPP\n\n"));
    }

    #[test]
    fn output_argument() {
        let dir = project();

        let output = run(&["-r", arg(dir.path()), "--output", "out/amalgamated.hpp"]).unwrap();
        assert_eq!(output, dir.path().join("out/amalgamated.hpp"));
        assert!(output.is_file());
    }

    #[test]
    fn config_file() {
        let dir = project();
        let config = dir.path().join("Amalgam.toml");
        fs::write(
            &config,
            format!(
                "[project]\nguard = \"REST_AMALGAMATED_HPP\"\n\n[paths]\nroot = {:?}\noutput = \"rest_single.hpp\"\n",
                arg(dir.path())
            ),
        )
        .unwrap();

        let output = run(&["-c", arg(&config)]).unwrap();
        assert_eq!(output, dir.path().join("rest_single.hpp"));

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("#ifndef REST_AMALGAMATED_HPP\n#define REST_AMALGAMATED_HPP\n"));
    }

    #[test]
    fn missing_config_fails() {
        let dir = project();
        let config = dir.path().join("Missing.toml");

        let err = run(&["-c", arg(&config), "-r", arg(dir.path())]).unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }

    #[test]
    fn missing_license_fails_before_output() {
        let dir = project();
        fs::remove_file(dir.path().join("LICENSE.txt")).unwrap();

        let err = run(&["-r", arg(dir.path())]).unwrap_err();
        assert!(err.to_string().contains("LICENSE.txt"));
        assert!(!dir.path().join("single").exists());
    }

    #[test]
    fn missing_root_fails() {
        let dir = project();
        let root = dir.path().join("nowhere");

        assert!(run(&["-r", arg(&root)]).is_err());
    }
}
