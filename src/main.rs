use anyhow::Context;
use clap::Parser;
use fs_err as fs;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use modep::{path_to_string, resolve, scan_imports, CandidatePool};

/// Print the dynamic-link dependencies of ELF and PE binaries
#[derive(Parser)]
#[command(name = "modep", version, about)]
struct Args {
    /// Executables or shared libraries to inspect
    #[arg(value_name = "MODULE", required = true)]
    modules: Vec<PathBuf>,

    /// Comma-separated directories to resolve dependencies from, transitively
    #[arg(long = "from-dir", value_name = "DIRS", value_delimiter = ',')]
    from_dir: Vec<PathBuf>,

    /// Path for output in JSON format
    #[arg(short = 'j', long = "output-json-path", value_name = "PATH")]
    output_json_path: Option<PathBuf>,
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let js = serde_json::to_string(value).context("Error serializing")?;
    let mut file =
        fs::File::create(path).with_context(|| format!("couldn't create {}", path.display()))?;
    file.write_all(js.as_bytes())
        .with_context(|| format!("couldn't write to {}", path.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let imports = scan_imports(&args.modules)?;

    if args.from_dir.is_empty() {
        // no candidate pool: report the imported module names themselves
        for name in imports.sorted_names() {
            println!("{name}");
        }
        if let Some(json_path) = &args.output_json_path {
            let entries: Vec<_> = imports.iter().collect();
            write_json(json_path, &entries)?;
        }
    } else {
        let pool = CandidatePool::from_roots(&args.from_dir)?;
        let mut dependencies: Vec<String> =
            resolve(imports, &pool)?.iter().map(path_to_string).collect();
        dependencies.sort_unstable();
        for dependency in &dependencies {
            println!("{dependency}");
        }
        if let Some(json_path) = &args.output_json_path {
            write_json(json_path, &dependencies)?;
        }
    }

    Ok(())
}
