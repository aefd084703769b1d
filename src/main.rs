use clap::Parser;
use parray::console::frame::VarSpec;
use parray::console::AppBuilder;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Define an extra frame variable, for example `--var primes=u64(2),u64(3)`
    #[arg(long = "var", value_name = "NAME=V1,V2,..")]
    vars: Vec<VarSpec>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let app = args
        .vars
        .into_iter()
        .fold(AppBuilder::new(), AppBuilder::with_variable)
        .build()
        .expect("build application fail");
    app.run().expect("run application fail");
}
