use template_rename::{
    cli::{get_args, get_log_level_from_verbose, run},
    error::default_error_handler,
    params::{self, Params},
};

fn main() {
    let args = get_args();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    let result = Params::load(&args.template_dir)
        .and_then(params::init)
        .and_then(|params| run(args, params));

    if let Err(err) = result {
        default_error_handler(err);
    }
}
