/// Played when no level file is given.
pub const DEFAULT_LEVEL: &str = r#"
########
#.   . #
#  $   #
# $#$  #
#  @   #
#.     #
########
"#;

pub const GAME_TITLE: &str = "Sokoban";
