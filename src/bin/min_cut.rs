use flowcut::instance::CutInstance;
use flowcut::minimum_cut::stoer_wagner::StoerWagner;
use log::error;
use std::io;
use std::process::ExitCode;

// reads `V E` and `E` lines `u v weight` from stdin, prints the global minimum cut
fn main() -> ExitCode {
    env_logger::init();

    let result = CutInstance::<i64>::read(io::stdin().lock()).and_then(|instance| {
        let graph = instance.to_graph()?;
        Ok(StoerWagner::default().solve(&graph)?)
    });

    match result {
        Ok(cut) => {
            println!("{}", cut);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
