use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Meetpass");
    box_line_center("Meeting password generator");
    box_line("");
    box_line("Generates one password of 8-10 characters with at least one");
    box_line("digit, one lowercase and one uppercase letter, and prints it");
    box_line("as a JSON record: [{\"password\": ..., \"validPassword\": ...}]");
    box_line("");
    box_line("USAGE:");
    box_line("  meetpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters in the password, 8 to 10 (default: 10)");
    box_opt("      --check <PASSWORD>", "Validate a password against the policy instead of generating one. Exit code 1 if invalid.");
    box_line("");
    box_line(" Output:");
    box_opt("  -p, --plain", "Print only the password, not the JSON record");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -i, --info", "Show entropy and self-check summary");
    box_opt("  -q, --quiet", "Suppress warnings and summaries");
    box_line("");
    box_line(" Entropy:");
    box_opt("  -u, --urandom", "Use /dev/urandom instead of the cycle counter");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("ENVIRONMENT:");
    box_line("  RUST_LOG                 Log filter (default: warn)");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  meetpass                 JSON record, 10 characters");
    box_line("  meetpass -l 8 -p         Bare 8-character password");
    box_line("  meetpass -b              Copy to clipboard");
    box_line("  meetpass --check Ab3def9 Validate an existing password");
    box_line("");
    box_bottom();
    println!();
}
