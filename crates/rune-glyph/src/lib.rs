#![deny(missing_docs)]
#![doc = "Attribute-to-code mapping: resolves ranked categorical attributes to necklace patterns through the code cache."]

use serde::{Deserialize, Serialize};

use rune_core::{ErrorInfo, Pattern, RuneError};
use rune_store::CodeCache;

/// Derives the glyph bit length for a number of attributes.
///
/// One spoke per attribute plus the mirrored set and the anchor point:
/// `2 * attribute_count + 1`. The generator itself accepts any width; this
/// formula belongs to the glyph layer.
pub fn bit_length_for(attribute_count: usize) -> Result<usize, RuneError> {
    if attribute_count < 1 {
        let info = ErrorInfo::new(
            "no-attributes",
            "a glyph needs at least one attribute to encode",
        );
        return Err(RuneError::Length(info));
    }
    Ok(2 * attribute_count + 1)
}

/// Input to the mapper: attribute ranks plus the pass-through marker flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSpec {
    /// Rank of each attribute value within its category list.
    pub attribute_ranks: Vec<usize>,
    /// Concentration marker drawn at the glyph center.
    #[serde(default)]
    pub concentration: bool,
    /// Ritual marker drawn around the glyph center.
    #[serde(default)]
    pub ritual: bool,
}

/// The patterns selected for one glyph, in attribute order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphFrame {
    /// Bit width shared by every selected pattern.
    pub bit_length: usize,
    /// One pattern per attribute, in the order the ranks were given.
    pub patterns: Vec<Pattern>,
    /// Concentration marker flag, passed through for the renderer.
    pub concentration: bool,
    /// Ritual marker flag, passed through for the renderer.
    pub ritual: bool,
}

/// Resolves attribute ranks to code-table rows through a cache.
#[derive(Debug, Clone)]
pub struct GlyphMapper {
    cache: CodeCache,
}

impl GlyphMapper {
    /// Creates a mapper over the given cache handle.
    pub fn new(cache: CodeCache) -> Self {
        Self { cache }
    }

    /// Returns the cache the mapper resolves against.
    pub fn cache(&self) -> &CodeCache {
        &self.cache
    }

    /// Maps a glyph spec to its pattern frame.
    ///
    /// Derives the bit length from the rank count, fetches the matching
    /// code table, and selects one row per rank. Every rank must fall
    /// inside the table.
    pub fn frame(&self, spec: &GlyphSpec) -> Result<GlyphFrame, RuneError> {
        let bit_length = bit_length_for(spec.attribute_ranks.len())?;
        let table = self.cache.fetch(bit_length)?;
        let mut patterns = Vec::with_capacity(spec.attribute_ranks.len());
        for (position, &rank) in spec.attribute_ranks.iter().enumerate() {
            let row = table.get(rank).ok_or_else(|| {
                RuneError::Pattern(
                    ErrorInfo::new("rank-out-of-range", "attribute rank exceeds the code table")
                        .with_context("position", position.to_string())
                        .with_context("rank", rank.to_string())
                        .with_context("table_len", table.len().to_string()),
                )
            })?;
            patterns.push(row.clone());
        }
        Ok(GlyphFrame {
            bit_length,
            patterns,
            concentration: spec.concentration,
            ritual: spec.ritual,
        })
    }
}
