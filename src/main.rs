#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("`jsonshape` CLI is only available with the `cli` feature");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::{
        fs::File,
        io::BufReader,
        path::{Path, PathBuf},
        process,
    };

    use clap::Parser;
    use jsonshape::{Schema, Value};

    #[derive(Parser)]
    #[command(name = "jsonshape")]
    struct Cli {
        /// A path to a JSON instance (i.e. filename.json) to check (may be specified multiple times).
        #[arg(short = 'i', long = "instance")]
        instances: Option<Vec<PathBuf>>,

        /// The shape schema to check with (i.e. schema.json).
        #[arg(value_parser, required_unless_present("version"))]
        schema: Option<PathBuf>,

        /// Show program's version number and exit.
        #[arg(short = 'v', long = "version")]
        version: bool,
    }

    fn read_json(path: &Path) -> serde_json::Result<serde_json::Value> {
        let file = File::open(path).expect("Failed to open file");
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
    }

    fn check_instances(
        instances: &[PathBuf],
        schema_path: PathBuf,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let mut success = true;

        let schema_json = read_json(&schema_path)?;
        match Schema::from_value(&schema_json) {
            Ok(schema) => {
                for instance in instances {
                    let value = Value::from(read_json(instance)?);
                    let result = jsonshape::matches(&value, &schema);
                    let filename = instance.to_string_lossy();
                    if result.matched {
                        println!("{filename} - VALID");
                    } else if let Some(path) = result.error_path {
                        success = false;
                        println!("{filename} - INVALID. Mismatch at {path}");
                    } else {
                        success = false;
                        println!("{filename} - INVALID");
                    }
                }
            }
            Err(error) => {
                println!("Schema is invalid. Error: {error}");
                success = false;
            }
        }
        Ok(success)
    }

    let config = Cli::parse();

    if config.version {
        println!(concat!("Version: ", env!("CARGO_PKG_VERSION")));
        return Ok(());
    }

    let mut success = true;
    if let Some(schema) = config.schema {
        if let Some(instances) = config.instances {
            success = check_instances(&instances, schema)?;
        }
    }

    if !success {
        process::exit(1);
    }

    Ok(())
}
