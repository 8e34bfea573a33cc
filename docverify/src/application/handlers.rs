use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use docverify_core::error::{Result, VerifyError};
use docverify_core::view::{render, snapshot};
use docverify_core::{
    AppState, EngineOptions, Event, FileHandle, SessionOptions, VerdictEngine, update,
};

use crate::presentation::cli::DashboardArgs;

const HELP: &str = "\
commands:
  select <path>   choose the document to verify
  verify          run verification on the selected document
  show            print the dashboard
  help            this text
  quit            leave";

fn setup(args: &DashboardArgs) -> (AppState, VerdictEngine) {
    let engine = VerdictEngine::new(&EngineOptions {
        policy: args.policy,
        seed: args.seed,
        script: args.script.clone(),
        digest: args.digest,
    });
    let state = AppState::new(SessionOptions {
        clear_result_on_select: args.clear_on_select,
    });
    tracing::debug!(policy = engine.policy_kind(), "dashboard ready");
    (state, engine)
}

fn print_dashboard<W: Write>(out: &mut W, state: &AppState, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &snapshot(state)).map_err(std::io::Error::from)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render(state))?;
    }
    Ok(())
}

fn print_notice<W: Write>(out: &mut W, notice: &VerifyError) -> Result<()> {
    match notice {
        VerifyError::NoSelection => writeln!(out, "! {notice}")?,
        other => writeln!(out, "! error: {other}")?,
    }
    Ok(())
}

pub fn handle_session<R: BufRead, W: Write>(
    args: DashboardArgs,
    input: R,
    mut out: W,
) -> Result<()> {
    let (mut state, mut engine) = setup(&args);
    print_dashboard(&mut out, &state, args.json)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };
        match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "show" => print_dashboard(&mut out, &state, args.json)?,
            "select" => {
                if rest.is_empty() {
                    print_notice(&mut out, &VerifyError::Parse("usage: select <path>".into()))?;
                } else {
                    match FileHandle::open(Path::new(rest)) {
                        Ok(file) => {
                            state = update(state, Event::Select(file), &mut engine).state;
                            print_dashboard(&mut out, &state, args.json)?;
                        }
                        Err(e) => print_notice(&mut out, &e)?,
                    }
                }
            }
            "verify" => {
                let t = update(state, Event::Trigger, &mut engine);
                state = t.state;
                match t.notice {
                    Some(n) => print_notice(&mut out, &n)?,
                    None => print_dashboard(&mut out, &state, args.json)?,
                }
            }
            other => print_notice(
                &mut out,
                &VerifyError::Parse(format!("unknown command `{other}` (try `help`)")),
            )?,
        }
        out.flush()?;
    }
    Ok(())
}

pub fn handle_check<W: Write>(files: Vec<PathBuf>, args: DashboardArgs, mut out: W) -> Result<()> {
    let (mut state, mut engine) = setup(&args);
    for path in files {
        let file = FileHandle::open(&path)?;
        state = update(state, Event::Select(file), &mut engine).state;
        let t = update(state, Event::Trigger, &mut engine);
        if let Some(n) = t.notice {
            return Err(n);
        }
        state = t.state;
        if !args.json {
            if let Some(res) = state.result() {
                writeln!(
                    out,
                    "{}: {} ({})",
                    res.file_name,
                    res.verdict.label(),
                    res.verdict.reason()
                )?;
            }
        }
    }
    print_dashboard(&mut out, &state, args.json)
}
