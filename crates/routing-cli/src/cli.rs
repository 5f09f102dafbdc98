//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Add bundle route imports to routing configuration files
#[derive(Parser, Debug)]
#[command(name = "routing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Import a bundle's routing resource into a routing file
    ///
    /// Examples:
    ///   routing add -f app/config/routing.yml -b AcmeBlogBundle
    ///   routing add -f app/config/routing.xml -b AcmeBlogBundle --format xml --prefix /blog
    Add {
        /// Routing file to edit (created if missing)
        #[arg(short, long)]
        file: String,

        /// Bundle whose routes are imported
        #[arg(short, long)]
        bundle: String,

        /// Routing format: yml, xml, php or annotation
        #[arg(long, default_value = "yml")]
        format: String,

        /// URL prefix for the imported routes
        #[arg(short, long)]
        prefix: Option<String>,

        /// Base name of the imported resource file
        #[arg(short, long)]
        resource: Option<String>,

        /// Config file (.toml or .yml) overriding defaults
        #[arg(short, long, env = "ROUTING_CONFIG")]
        config: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_defaults() {
        let cli = Cli::parse_from(["routing", "add", "-f", "routing.yml", "-b", "FooBundle"]);
        assert!(!cli.verbose);
        let Commands::Add {
            file,
            bundle,
            format,
            prefix,
            resource,
            ..
        } = cli.command;
        assert_eq!(file, "routing.yml");
        assert_eq!(bundle, "FooBundle");
        assert_eq!(format, "yml");
        assert!(prefix.is_none());
        assert!(resource.is_none());
    }

    #[test]
    fn test_parse_add_full() {
        let cli = Cli::parse_from([
            "routing", "-v", "add", "--file", "routing.xml", "--bundle", "FooBundle", "--format",
            "xml", "--prefix", "/foo", "--resource", "admin",
        ]);
        assert!(cli.verbose);
        let Commands::Add {
            format,
            prefix,
            resource,
            ..
        } = cli.command;
        assert_eq!(format, "xml");
        assert_eq!(prefix.as_deref(), Some("/foo"));
        assert_eq!(resource.as_deref(), Some("admin"));
    }

    #[test]
    fn test_add_requires_bundle() {
        assert!(Cli::try_parse_from(["routing", "add", "-f", "routing.yml"]).is_err());
    }
}
