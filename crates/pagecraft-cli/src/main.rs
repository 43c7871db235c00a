use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pagecraft_cli::{execute, resolve_config, RunRequest};
use pagecraft_core::{build_pipeline, PipelineConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("pagecraft")
        .version(pagecraft_cli::VERSION)
        .about("Generate and certify product, FAQ and comparison pages")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run the full generate-then-certify pipeline")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Product record JSON file"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_parser(value_parser!(PathBuf))
                        .help("Pipeline config TOML file"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .value_parser(value_parser!(PathBuf))
                        .help("Output directory (overrides config)"),
                )
                .arg(
                    Arg::new("schema-dir")
                        .long("schema-dir")
                        .value_parser(value_parser!(PathBuf))
                        .help("Schema directory (overrides config)"),
                )
                .arg(
                    Arg::new("status-file")
                        .long("status-file")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the run status record here"),
                )
                .arg(
                    Arg::new("log-json")
                        .long("log-json")
                        .action(ArgAction::SetTrue)
                        .help("Emit logs as JSON lines"),
                ),
        )
        .subcommand(Command::new("order").about("Print the pipeline's node execution order"))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env("PAGECRAFT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(args: &ArgMatches) -> anyhow::Result<i32> {
    let config = resolve_config(
        args.get_one::<PathBuf>("config"),
        args.get_one::<PathBuf>("out-dir"),
        args.get_one::<PathBuf>("schema-dir"),
    )?;
    let request = RunRequest {
        input: args
            .get_one::<PathBuf>("input")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("--input is required"))?,
        config,
        status_file: args.get_one::<PathBuf>("status-file").cloned(),
    };

    let (status, ctx) = execute(&request)?;
    match (&status.error, ctx) {
        (None, Some(ctx)) => {
            if let Some(product) = ctx.product() {
                println!("Product:   {}", product.name());
            }
            if let Some(questions) = ctx.questions() {
                println!("Questions: {}", questions.len());
            }
            for record in ctx.artifacts() {
                println!("Wrote:     {} ({})", record.path.display(), &record.sha256[..12]);
            }
            println!("Validation passed");
        }
        (error, _) => {
            eprintln!("Run failed: {}", error.as_deref().unwrap_or("unknown error"));
        }
    }
    println!("Run id:    {}", status.run_id);
    Ok(status.exit_code)
}

fn order() -> anyhow::Result<i32> {
    let graph = build_pipeline(&PipelineConfig::default())?;
    for (position, node) in graph.execution_order()?.iter().enumerate() {
        let deps = graph
            .dependencies(node.as_str())
            .unwrap_or_default()
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if deps.is_empty() {
            println!("{:>2}. {node}", position + 1);
        } else {
            println!("{:>2}. {node} <- {deps}", position + 1);
        }
    }
    Ok(0)
}

fn main() {
    let matches = cli().get_matches();

    let outcome = match matches.subcommand() {
        Some(("run", args)) => {
            init_tracing(args.get_flag("log-json"));
            run(args)
        }
        Some(("order", _)) => order(),
        _ => Ok(2),
    };

    match outcome {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
