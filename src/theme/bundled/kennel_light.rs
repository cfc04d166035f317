//! Kennel Light - daylight companion to Kennel Dark

pub const THEME: &str = r##"# Kennel Light theme for dogdex
# Parchment and leather for bright rooms

[meta]
name = "Kennel Light"
version = 1
author = "dogdex"

[ui]
background = "#f6f1e7"
foreground = "#4a4238"
border = "#d8cfc0"
border_focused = "#a06b2e"
title = "#8a5a24"
status_bar = "#8a5a24"
selection_bg = "#e7ddcb"
selection_fg = "#3a332b"
muted = "#9a8f80"
border_type = "rounded"

[panels]
breeds = "#a06b2e"
facts = "#3d6e96"
care = "#a84f4f"
accent = "#3f8a80"
"##;
