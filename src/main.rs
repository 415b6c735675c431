use rendertemplates::{
    cli::{get_args, run},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    args.log_builder().init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
