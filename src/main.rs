use zugzwang::board;
use zugzwang::engine::Engine;
use zugzwang::types::EngineConfig;

fn main() {
    board::init();
    env_logger::init();

    let mut engine = Engine::new(EngineConfig::default());
    match engine.choose_move(None) {
        Ok(mv) => println!("{mv}"),
        Err(err) => eprintln!("error: {err}"),
    }
}
