//! Batch cleaner for zh-Wikipedia dump extracts: wikitext stripped,
//! Traditional converted to Simplified, junk pages filtered, one JSON
//! record per output line.

pub mod cleaner;
pub mod wikitext;
pub mod zh;
