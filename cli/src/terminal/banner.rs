use colored::*;

use crate::terminal::print;

const BANNER_0: &str = r#"
         _               _                  _
        | |__   ___ _ __| |__   __ _ _ __(_)_   _ _ __ ___
        | '_ \ / _ \ '__| '_ \ / _` | '__| | | | | '_ ` _ \
        | | | |  __/ |  | |_) | (_| | |  | | |_| | | | | | |
        |_| |_|\___|_|  |_.__/ \__,_|_|  |_|\__,_|_| |_| |_|
"#;

const BANNER_1: &str = r#"
                          .
                   __   /|\   __
                   \ `-/ | \-' /        H E R B A R I U M
                 ._ \   \|/   / _.
                  `-.`-. | .-'.-'       a virtual garden of
                     `-.\|/.-'          AYUSH medicinal plants
                         |
                       \_|_/
"#;

const BANNER_2: &str = r#"
            ,--.                        ,--.
           (  ) )   .-. .-. .-. .-.    ( (  )
            `--'    |-  |(  |(  `-.     `--'
          __/||\__  `-' ' ' `-' `-'   __/||\__
             ||        h e r b a r i u m   ||
"#;

const BANNERS: [&str; 3] = [BANNER_0, BANNER_1, BANNER_2];

pub fn print() {
    let n: usize = rand::random_range(0..BANNERS.len());
    print::print(&format!("{}", BANNERS[n].green().bold()));
}
