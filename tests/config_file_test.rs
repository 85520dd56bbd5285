use anyhow::Result;
use clap::Parser;
use hanoi::adapters::sink_for;
use hanoi::config::input::read_disk_count;
use hanoi::config::toml_config::TomlConfig;
use hanoi::core::ConfigProvider;
use hanoi::{CliConfig, HanoiError, OutputFormat, Rod, SolveEngine};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_config_file_drives_a_full_run() -> Result<()> {
    let file = write_config(
        r#"
disks = 3

[rods]
source = "L"
destination = "R"
auxiliary = "M"

[monitoring]
verify = true
"#,
    )?;

    let cli = CliConfig::try_parse_from(["hanoi", "--config", file.path().to_str().unwrap()])?;
    let settings = cli.resolve()?;
    assert_eq!(settings.disks(), Some(3));
    assert!(settings.verify());

    let mut engine = SolveEngine::new(
        hanoi::adapters::TextSink::new(Vec::new()),
        settings.rods()?,
    )
    .with_verification(settings.verify());
    let summary = engine.run(3)?;
    assert_eq!(summary.moves, 7);

    let out = String::from_utf8(engine.into_sink().into_inner()?)?;
    assert_eq!(out.lines().next(), Some("Move disk 1 from L to R"));
    assert_eq!(out.lines().nth(3), Some("Move disk 3 from L to R"));
    Ok(())
}

#[test]
fn test_env_substitution_in_config_file() -> Result<()> {
    std::env::set_var("HANOI_IT_DISKS", "5");
    std::env::set_var("HANOI_IT_FORMAT", "json");

    let file = write_config("disks = ${HANOI_IT_DISKS}\n[output]\nformat = \"${HANOI_IT_FORMAT}\"\n")?;
    let config = TomlConfig::from_file(file.path())?;
    assert_eq!(config.disk_count()?, Some(5));
    assert_eq!(config.output_format()?, Some(OutputFormat::Json));

    std::env::remove_var("HANOI_IT_DISKS");
    std::env::remove_var("HANOI_IT_FORMAT");
    Ok(())
}

#[test]
fn test_bad_rod_label_in_config_file() -> Result<()> {
    let file = write_config("[rods]\nsource = \"AB\"\n")?;
    let cli = CliConfig::try_parse_from(["hanoi", "-c", file.path().to_str().unwrap()])?;

    let err = cli.resolve().unwrap_err();
    assert!(matches!(err, HanoiError::InvalidConfigValueError { ref field, .. } if field == "rods.source"));
    assert_eq!(err.exit_code(), 2);
    Ok(())
}

#[test]
fn test_missing_config_file() -> Result<()> {
    let cli = CliConfig::try_parse_from(["hanoi", "--config", "/nonexistent/hanoi.toml"])?;
    assert!(matches!(
        cli.resolve(),
        Err(HanoiError::ConfigValidationError { .. })
    ));
    Ok(())
}

#[test]
fn test_stdin_disk_count_then_run() -> Result<()> {
    let cli = CliConfig::try_parse_from(["hanoi", "--destination", "B", "--auxiliary", "C"])?;
    let settings = cli.resolve()?;
    assert_eq!(settings.disks(), None);
    assert_eq!(settings.rods()?.destination(), Rod::new('B'));

    let disks = read_disk_count(&mut Cursor::new("2\n"), None::<&mut Vec<u8>>)?;

    let mut engine = SolveEngine::new(sink_for(settings.output_format(), std::io::sink()), settings.rods()?);
    let summary = engine.run(disks)?;
    assert_eq!(summary.moves, 3);
    Ok(())
}

#[test]
fn test_unparsable_stdin_is_rejected() {
    for input in ["three\n", "-4\n", "\n"] {
        let err = read_disk_count(&mut Cursor::new(input), None::<&mut Vec<u8>>).unwrap_err();
        assert!(matches!(err, HanoiError::InvalidInput { .. }), "{:?}", input);
        assert_eq!(err.exit_code(), 2);
    }
}
