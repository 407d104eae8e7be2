use console::style;
use localgroup_core::error::CatalogError;
use std::fmt;

/// Error presented to the user, with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a lookup that matched nothing
pub fn galaxy_not_found(query: &str) -> CliError {
    CliError::new("Galaxy not found")
        .with_context(format!(
            "No galaxy has this id, name, or alternate name.\n\nQuery: {}",
            query
        ))
        .with_suggestion(format!("Search by substring: localgroup search \"{}\"", query))
        .with_suggestion("List every galaxy: localgroup list")
        .with_help("Run: localgroup show --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check localgroup.toml for typos or unknown keys")
        .with_suggestion("Check LOCALGROUP_* environment variables")
        .with_help("Run: localgroup config")
}

/// Create error for a built-in table row that cannot be assembled
pub fn catalog_table_invalid(detail: &str) -> CliError {
    CliError::new("Galaxy table is invalid")
        .with_context(format!(
            "A row of the built-in galaxy table could not be assembled. \
             No files were written.\n\nError: {}",
            detail
        ))
        .with_suggestion("Fix the offending row in the galaxy table and rebuild")
}

/// Create error for output that could not be written
pub fn output_not_writable(detail: &str) -> CliError {
    CliError::new("Cannot write catalog files")
        .with_context(format!("Error: {}", detail))
        .with_suggestion("Check that the output directory is writable")
        .with_suggestion("Or choose another directory: localgroup build --output-dir <DIR>")
        .with_help("Run: localgroup build --help")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let detail = format!("{:#}", error);

    match error.downcast_ref::<CatalogError>() {
        Some(CatalogError::GalaxyNotFound { query }) => galaxy_not_found(query),
        Some(CatalogError::ConfigInvalid { key, reason }) => invalid_config(key, reason),
        Some(
            CatalogError::MalformedCoordinate { .. }
            | CatalogError::InvalidDistance { .. }
            | CatalogError::DuplicateId { .. },
        ) => catalog_table_invalid(&detail),
        Some(CatalogError::Io(_)) => output_not_writable(&detail),
        _ if detail.contains("No such file or directory") => CliError::new("File not found")
            .with_context(format!("Error: {}", detail))
            .with_suggestion("Check the file path and try again"),
        _ => CliError::new(detail),
    }
}
