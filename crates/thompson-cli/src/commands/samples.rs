use thompson_lib::samples::{samples_listing, samples_narration};

pub struct SamplesArgs {
    pub narrate: bool,
}

pub fn run(args: SamplesArgs) {
    println!("{}", samples_listing());
    if args.narrate {
        println!();
        println!("{}", samples_narration());
    }
}
