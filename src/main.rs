use std::env::args_os;

use stripe_row_editor::{stripe_image_row, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match stripe_image_row(&arguments) {
        Ok(_) => println!("Row striped successfully"),
        Err(e) => eprintln!("Striping failed because of: {}", e),
    }
}
