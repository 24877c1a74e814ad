use flowcut::instance::FlowInstance;
use flowcut::maximum_flow::dinic::Dinic;
use log::error;
use std::io;
use std::process::ExitCode;

// reads `V E s t` and `E` lines `u v capacity` from stdin, prints the maximum flow
fn main() -> ExitCode {
    env_logger::init();

    let result = FlowInstance::<i64>::read(io::stdin().lock()).and_then(|instance| {
        let mut graph = instance.to_graph()?;
        Ok(Dinic::default().solve(instance.source, instance.sink, &mut graph)?)
    });

    match result {
        Ok(flow) => {
            println!("{}", flow);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
