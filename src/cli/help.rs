use crate::rand::source_name;
use crate::settings::MAX_COUNT;
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Jytter");
    box_line_center("True random integers and passwords from CPU timing jitter");
    box_line("");
    box_line("USAGE:");
    box_line("  jytter [OPTIONS]");
    box_line("");
    box_line("  With no options, prints 64/128/256-bit hex integers, then");
    box_line("  65/130/256-bit alphanumeric passwords, then the run's cost");
    box_line("  in CPU ticks.");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Output:");
    box_opt(
        "  -x, --hex <WORDS>",
        &format!("Hex integer of WORDS 32-bit words (max {MAX_COUNT}). Repeatable."),
    );
    box_opt(
        "  -p, --password <CHARS>",
        &format!("Alphanumeric password of CHARS characters (max {MAX_COUNT}). Repeatable."),
    );
    box_opt("  -b, --board", "Copy passwords to clipboard instead of printing");
    box_opt("  -q, --quiet", "Values only, one per line");
    box_opt("      --verbose", "Debug logging on stderr");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line(&format!("Cycle counter: {}", source_name()));
    box_line("");
    box_line("EXAMPLES:");
    box_line("  jytter                   Default run");
    box_line("  jytter -p 20             One 20-character password");
    box_line("  jytter -x 4 -x 8 -q      128- and 256-bit hex, values only");
    box_line("  jytter -b                Default run, passwords to clipboard");
    box_line("");
    box_bottom();
    println!();
}
