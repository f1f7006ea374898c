//! Glyph tables for scene particles.

/// Snow glyphs, two per size bucket (small, medium, large).
pub const SNOW_CHARS: &[char] = &['·', '∙', '•', '❅', '❄', '❆'];

/// Glyphs for the tree foliage point cloud.
pub const CANOPY_CHARS: &[char] = &['·', '•', '*', '✦'];

/// Glyphs for the distant background starfield.
pub const STARFIELD_CHARS: &[char] = &['.', '*', '+', '·', '✦', '✧'];

/// Hanging bauble ornament.
pub const ORNAMENT_CHAR: char = '●';

/// Bow ornament variant.
pub const BOW_CHAR: char = '◆';

/// Center of the tree-top star.
pub const STAR_CHAR: char = '★';

/// Outer points of the tree-top star.
pub const STAR_RAY_CHAR: char = '✦';

/// Gift box and ribbon surfaces.
pub const GIFT_CHAR: char = '█';

/// Tree trunk surface.
pub const TRUNK_CHAR: char = '▓';

/// Scattered ground points.
pub const GROUND_CHAR: char = '·';

/// Snow mound points under the tree.
pub const MOUND_CHAR: char = '∙';
