//! The `stylist analyze` command.

use clap::{Args, ValueEnum};
use std::fmt::Write as _;
use stylist_core::{Config, ImageStylist, ProviderVariant, StyleAnalysisResult};

/// Arguments for the `analyze` command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Product image URLs or file paths (several views of the same item)
    #[arg(required = true)]
    pub images: Vec<String>,

    /// Style profile text
    #[arg(short, long, required_unless_present = "profile_file", conflicts_with = "profile_file")]
    pub profile: Option<String>,

    /// Read the style profile from a file
    #[arg(long)]
    pub profile_file: Option<String>,

    /// Answer language (defaults to request.language from config)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Provider protocol (defaults to provider.kind, else inferred from the endpoint)
    #[arg(long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Endpoint URL override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Model name override
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key override
    #[arg(long, env = "STYLIST_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Supported provider protocols.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProviderArg {
    /// OpenAI-compatible chat completions (images by URL)
    CloudChat,
    /// Local model server such as Ollama (inline images)
    LocalModel,
}

impl From<ProviderArg> for ProviderVariant {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::CloudChat => ProviderVariant::CloudChat,
            ProviderArg::LocalModel => ProviderVariant::LocalModel,
        }
    }
}

/// Supported output formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// The five-field result as JSON
    Json,
}

/// Execute the analyze command.
pub async fn execute(args: AnalyzeArgs, mut config: Config) -> anyhow::Result<()> {
    apply_overrides(&mut config, &args);

    let style_profile = match (&args.profile, &args.profile_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_profile(path)?,
        (None, None) => anyhow::bail!("Either --profile or --profile-file is required"),
    };
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| config.request.language.clone());

    let stylist = ImageStylist::from_config(&config)?;
    tracing::info!(
        "Analyzing {} image(s) with {} ({})",
        args.images.len(),
        config.provider.model,
        stylist.variant()
    );

    let result = stylist
        .get_style_analysis(&args.images, &style_profile, &language)
        .await?;

    match args.format {
        OutputFormat::Text => print!("{}", render_report(&result)),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, args: &AnalyzeArgs) {
    if let Some(endpoint) = &args.endpoint {
        config.provider.endpoint = endpoint.clone();
    }
    if let Some(model) = &args.model {
        config.provider.model = model.clone();
    }
    if let Some(provider) = args.provider {
        config.provider.kind = Some(provider.into());
    }
    if let Some(key) = &args.api_key {
        config.provider.api_key = key.clone();
    }
}

fn read_profile(path: &str) -> anyhow::Result<String> {
    let expanded = shellexpand::tilde(path);
    let text = std::fs::read_to_string(expanded.as_ref())
        .map_err(|e| anyhow::anyhow!("Failed to read profile file {path}: {e}"))?;
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Profile file {path} is empty");
    }
    Ok(text.to_string())
}

/// Render the human-readable report.
pub fn render_report(result: &StyleAnalysisResult) -> String {
    let mut out = String::new();

    if result.is_style_match() {
        out.push_str("Recommendation: This item is a likely MATCH for your style.\n");
    } else {
        out.push_str("Recommendation: This item is likely NOT a match for your style.\n");
    }

    let sections = [
        ("Objective Description", result.objective_description()),
        ("Style Analysis", result.style_analysis()),
        (
            "Outfit Suggestion",
            result.outfit_suggestion().unwrap_or("None provided."),
        ),
        ("Occasion Analysis", result.occasion_analysis()),
    ];
    for (title, body) in sections {
        let _ = write!(out, "\n{title}:\n{body}\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(extra: &[&str]) -> AnalyzeArgs {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: AnalyzeArgs,
        }

        let mut argv = vec!["stylist", "https://a/1.jpg"];
        argv.extend_from_slice(extra);
        Wrapper::try_parse_from(argv).unwrap().args
    }

    /// Results only come out of the interpreter, so build them through it.
    fn interpreted(answer: serde_json::Value) -> StyleAnalysisResult {
        let body = serde_json::json!({
            "choices": [{"message": {"content": answer.to_string()}}]
        });
        stylist_core::llm::interpret(body.to_string().as_bytes(), ProviderVariant::CloudChat)
            .unwrap()
    }

    #[test]
    fn test_render_report_match() {
        let result = interpreted(serde_json::json!({
            "objectiveDescription": "A navy blazer",
            "styleAnalysis": "Fits your palette",
            "isStyleMatch": true,
            "outfitSuggestion": "Grey trousers",
            "occasionAnalysis": "Business meetings"
        }));
        let report = render_report(&result);
        assert!(report.starts_with("Recommendation: This item is a likely MATCH"));
        assert!(report.contains("\nOutfit Suggestion:\nGrey trousers\n"));
        assert!(report.contains("\nOccasion Analysis:\nBusiness meetings\n"));
    }

    #[test]
    fn test_render_report_no_match_without_suggestion() {
        let result = interpreted(serde_json::json!({
            "objectiveDescription": "Neon track jacket",
            "styleAnalysis": "Too bright",
            "isStyleMatch": false,
            "outfitSuggestion": null,
            "occasionAnalysis": "Gym"
        }));
        let report = render_report(&result);
        assert!(report.contains("likely NOT a match"));
        assert!(report.contains("\nOutfit Suggestion:\nNone provided.\n"));
    }

    #[test]
    fn test_overrides_applied_to_config() {
        let args = args(&[
            "--profile",
            "muted",
            "--provider",
            "local-model",
            "--endpoint",
            "http://gpu:8080/api/generate",
            "--model",
            "llava",
        ]);
        let mut config = Config::default();
        apply_overrides(&mut config, &args);

        assert_eq!(config.provider.variant(), ProviderVariant::LocalModel);
        assert_eq!(config.provider.endpoint, "http://gpu:8080/api/generate");
        assert_eq!(config.provider.model, "llava");
    }

    #[test]
    fn test_invalid_override_rejected_when_client_is_built() {
        let args = args(&["--profile", "muted", "--model", "", "--api-key", "sk-cli"]);
        let mut config = Config::default();
        apply_overrides(&mut config, &args);

        let err = ImageStylist::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("provider.model"));
    }

    #[test]
    fn test_profile_and_profile_file_conflict() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: AnalyzeArgs,
        }

        assert!(Wrapper::try_parse_from(["stylist", "img.jpg"]).is_err());
        assert!(Wrapper::try_parse_from([
            "stylist",
            "img.jpg",
            "--profile",
            "a",
            "--profile-file",
            "b.txt"
        ])
        .is_err());
    }

    #[test]
    fn test_read_profile_trims_and_rejects_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  Elegant, business-casual.  ").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(read_profile(&path).unwrap(), "Elegant, business-casual.");

        let empty = tempfile::NamedTempFile::new().unwrap();
        assert!(read_profile(&empty.path().to_string_lossy()).is_err());
    }
}
