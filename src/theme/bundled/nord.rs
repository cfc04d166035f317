//! Nord - arctic, north-bluish palette

pub const THEME: &str = r##"# Nord theme for dogdex
# Based on the Nord palette (nordtheme.com)

[meta]
name = "Nord"
version = 1
author = "dogdex"

[ui]
background = "#2e3440"
foreground = "#d8dee9"
border = "#3b4252"
border_focused = "#88c0d0"
title = "#88c0d0"
status_bar = "#81a1c1"
selection_bg = "#434c5e"
selection_fg = "#eceff4"
muted = "#4c566a"
border_type = "rounded"

[panels]
breeds = "#ebcb8b"
facts = "#81a1c1"
care = "#bf616a"
accent = "#a3be8c"
"##;
