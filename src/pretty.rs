//! Coloured one-shot messages for the line-oriented commands.

macro_rules! print_cmd_error {
    ($title:expr, $($detail:tt)+) => {{
        eprintln!("\x1b[1;31merror:\x1b[0m {}", $title);
        eprintln!("  {}", core::format_args!($($detail)+));
    }};
    ($title:expr) => {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", $title)
    };
}

macro_rules! print_cmd_info {
    ($title:expr, $($detail:tt)+) => {{
        println!("\x1b[1;32m{}\x1b[0m", $title);
        println!("  {}", core::format_args!($($detail)+));
    }};
}

pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
