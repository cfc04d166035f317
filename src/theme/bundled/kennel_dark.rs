//! Kennel Dark - the flagship theme for dogdex

pub const THEME: &str = r##"# Kennel Dark theme for dogdex
# Warm browns and tans, easy on the eyes after lights-out

[meta]
name = "Kennel Dark"
version = 1
author = "dogdex"

[ui]
background = "#262321"
foreground = "#d8d0c7"
border = "#3c3833"
border_focused = "#d9a05b"
title = "#d9a05b"
status_bar = "#d9a05b"
selection_bg = "#3d3631"
selection_fg = "#efe9e1"
muted = "#8c8379"
border_type = "rounded"

[panels]
breeds = "#c9995c"
facts = "#6b98b8"
care = "#b56d6d"
accent = "#5da9a1"
"##;
