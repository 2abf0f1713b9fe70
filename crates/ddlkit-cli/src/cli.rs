use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Render,
    Init,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Render(RenderArgs),
    Init(InitArgs),
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub files: Vec<PathBuf>,
    pub out: Option<PathBuf>,
    pub strict: bool,
    pub dry_run: bool,
    pub check: bool,
}

#[derive(Debug, Clone)]
pub struct InitArgs {
    pub path: PathBuf,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "render" => parse_render(it.map(|s| s.as_str())),
        "init" => parse_init(it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_render<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut out: Option<PathBuf> = None;
    let mut strict = false;
    let mut dry_run = false;
    let mut check = false;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Render)),
            "--out" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--out requires a value");
                };
                out = Some(PathBuf::from(v));
            }
            _ if token.starts_with("--out=") => {
                out = Some(PathBuf::from(token.trim_start_matches("--out=")));
            }
            "--strict" => strict = true,
            "--dry-run" => dry_run = true,
            "--check" => check = true,
            other if other.starts_with('-') => anyhow::bail!("unknown argument: {other}"),
            other => files.push(PathBuf::from(other)),
        }
    }

    if files.is_empty() {
        // Treat `ddlkit render` (no args) as help, but keep other cases strict.
        if out.is_none() && !strict && !dry_run && !check {
            return Ok(Command::Help(HelpTopic::Render));
        }
        anyhow::bail!("missing input: expected `ddlkit render <FILE>...`");
    }
    if out.is_some() && files.len() > 1 {
        anyhow::bail!("--out accepts exactly one input file");
    }
    if out.is_none() && (dry_run || check) {
        anyhow::bail!("--dry-run and --check require --out");
    }
    if dry_run && check {
        anyhow::bail!("--dry-run and --check are mutually exclusive");
    }

    Ok(Command::Render(RenderArgs {
        files,
        out,
        strict,
        dry_run,
        check,
    }))
}

fn parse_init<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut path = PathBuf::from("table.toml");

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Init)),
            "--path" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--path requires a value");
                };
                path = PathBuf::from(v);
            }
            _ if token.starts_with("--path=") => {
                path = PathBuf::from(token.trim_start_matches("--path="));
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    Ok(Command::Init(InitArgs { path }))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
ddlkit - render CREATE TABLE statements from TOML table definitions

USAGE:
  ddlkit <COMMAND> [OPTIONS]

COMMANDS:
  render        Render table definition files to SQL
  init          Write a starter table definition file

Run `ddlkit <command> --help` for more.
Set RUST_LOG=ddlkit=debug to see builder diagnostics."
            );
        }
        HelpTopic::Render => {
            println!(
                "\
USAGE:
  ddlkit render [OPTIONS] <FILE>...

OPTIONS:
  --strict              Fail instead of warning on problems the builder records
  --out <FILE>          Write SQL to file (single input only; default: stdout)
  --dry-run             Print whether --out would change
  --check               Exit non-zero if --out is out of date
  -h, --help            Print help"
            );
        }
        HelpTopic::Init => {
            println!(
                "\
USAGE:
  ddlkit init [OPTIONS]

OPTIONS:
  --path <FILE>         Definition file to create (default: table.toml)
  -h, --help            Print help"
            );
        }
    }
}
