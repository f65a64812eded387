use std::{io, process::ExitCode};

use dice_roller::{
    game::{Game, GameConfig},
    roller::Roller,
};

fn main() -> ExitCode {
    if let Err(err) = env_logger::builder()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] - {}", record.level(), record.args())
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init()
    {
        eprintln!("Unable to start logger: {err}");
    }

    let mut game = Game::new(
        GameConfig::default(),
        Roller::new(),
        io::stdin().lock(),
        io::stdout().lock(),
    );

    if let Err(err) = game.start() {
        log::error!("Unable to prepare dice: {err}");
        return ExitCode::from(1);
    }

    match game.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
