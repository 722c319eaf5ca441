mod cli;
mod commands;

use cli::{
    CheckParams, DumpParams, ExecParams, PostfixParams, SamplesParams, StepsParams, TraceParams,
    build_cli,
};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("postfix", m)) => {
            let params = PostfixParams::from_matches(m);
            commands::postfix::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("steps", m)) => {
            let params = StepsParams::from_matches(m);
            commands::steps::run(params.into());
        }
        Some(("exec", m)) => {
            let params = ExecParams::from_matches(m);
            commands::exec::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("samples", m)) => {
            let params = SamplesParams::from_matches(m);
            commands::samples::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
