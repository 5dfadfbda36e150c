use clap::Parser;

use challenge_runner::error::NiceError;
use challenge_runner::{
    main_current, main_engines, main_gen_autocompletion, main_init, main_test, Command, Opt,
};

fn main() {
    let opt = Opt::parse();
    opt.logger.enable_log();

    let result = match opt.command {
        Command::Test(test) => main_test(test, &opt.storage).map(|outcome| outcome.is_success()),
        Command::Init(init) => main_init(init, &opt.storage).map(|_| true),
        Command::Engines => main_engines().map(|_| true),
        Command::Current => main_current(&opt.storage).map(|_| true),
        Command::GenAutocompletion(autocompletion) => {
            main_gen_autocompletion(autocompletion).map(|_| true)
        }
    };
    std::process::exit(result.nice_exit_code());
}
