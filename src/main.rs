use anyhow::Result;
use rhino2moq::cli::{parse_args, Commands};
use rhino2moq::commands::{convert_path, run_batch, ConvertConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = parse_args();

    match cli.command {
        Commands::Convert {
            path,
            output,
            in_place,
        } => convert_path(ConvertConfig {
            path,
            output,
            in_place,
        }),
        Commands::Batch { list } => run_batch(&list),
        Commands::Stages => {
            for name in rhino2moq::stage_names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}
