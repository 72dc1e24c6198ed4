use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rhino2moq")]
#[command(about = "Rewrites C# test sources from Rhino Mocks to Moq", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a file, or every .cs file under a directory
    Convert {
        /// File or directory to convert
        path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Write the converted text back over the input
        #[arg(long = "in-place")]
        in_place: bool,
    },

    /// Convert every file named in a list file, in place
    Batch {
        /// File with one path per line; blank lines and '#' comments are skipped
        list: PathBuf,
    },

    /// Print the pipeline stages in execution order
    Stages,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_convert_command() {
        let args = vec!["rhino2moq", "convert", "Tests.cs", "--output", "Out.cs"];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Convert {
                path,
                output,
                in_place,
            } => {
                assert_eq!(path, PathBuf::from("Tests.cs"));
                assert_eq!(output, Some(PathBuf::from("Out.cs")));
                assert!(!in_place);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_cli_parsing_convert_in_place() {
        let args = vec!["rhino2moq", "convert", "Tests.cs", "--in-place"];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Convert { in_place, .. } => assert!(in_place),
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_output_conflicts_with_in_place() {
        let args = vec![
            "rhino2moq",
            "convert",
            "Tests.cs",
            "--output",
            "Out.cs",
            "--in-place",
        ];

        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_batch_command() {
        let args = vec!["rhino2moq", "batch", "files.txt"];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Batch { list } => {
                assert_eq!(list, PathBuf::from("files.txt"));
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_cli_parsing_stages_command() {
        let cli = Cli::parse_from(vec!["rhino2moq", "stages"]);
        assert!(matches!(cli.command, Commands::Stages));
    }
}
