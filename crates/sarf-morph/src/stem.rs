// Pattern substitution into slot-tagged letter segments
//
// The rule engine needs to know which letters came from which radical, so
// substitution produces a `Stem`: one segment per letter, each carrying the
// diacritics written after it and the slot it was filled from. Rendering a
// stem yields exactly the substituted string.

use std::fmt;

use sarf_core::character::{
    FIRST_RADICAL_MARKER, SECOND_RADICAL_MARKER, SHADDA, SUKUN, THIRD_RADICAL_MARKER,
    is_diacritic, is_long_vowel,
};
use sarf_core::root::Root;

/// Where a segment's letter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Fixed template character.
    Template,
    /// Radical by 1-based position.
    Radical(u8),
}

/// A letter with its trailing diacritics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub letter: char,
    pub marks: String,
    pub slot: Slot,
}

impl Segment {
    fn new(letter: char, slot: Slot) -> Self {
        Self {
            letter,
            marks: String::new(),
            slot,
        }
    }

    pub fn is_template(&self) -> bool {
        self.slot == Slot::Template
    }

    /// A fixed template letter that spells a long vowel (alef, waw, ya).
    pub fn is_template_vowel(&self) -> bool {
        self.is_template() && is_long_vowel(self.letter)
    }

    pub fn has_mark(&self, mark: char) -> bool {
        self.marks.contains(mark)
    }

    /// Whether the letter is vowelled, i.e. carries marks other than sukun
    /// or shadda.
    pub fn has_vowel(&self) -> bool {
        self.marks.chars().any(|m| m != SUKUN && m != SHADDA)
    }

    /// Replace the marks with a single vowel.
    pub fn set_vowel(&mut self, vowel: char) {
        self.marks.clear();
        self.marks.push(vowel);
    }

    /// Append a shadda after the existing vowel marks, dropping sukun.
    ///
    /// Vowels come first: fatha, damma and kasra sort before shadda in
    /// canonical combining order.
    pub fn add_shadda(&mut self) {
        if self.has_mark(SHADDA) {
            return;
        }
        self.marks.retain(|m| m != SUKUN);
        self.marks.push(SHADDA);
    }
}

/// A substituted pattern: the sequence of letter segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stem {
    segments: Vec<Segment>,
}

impl Stem {
    /// Substitute a root's radicals into a template.
    ///
    /// Scans the template once. Each radical marker becomes a segment holding
    /// the matching radical; every other letter is copied as a template
    /// segment. Diacritics attach to the preceding segment; a diacritic
    /// opening the template becomes its own template segment so the text
    /// round-trips verbatim.
    pub fn substitute(root: &Root, template: &str) -> Self {
        let mut segments: Vec<Segment> = Vec::with_capacity(template.len());
        for c in template.chars() {
            if is_diacritic(c) {
                match segments.last_mut() {
                    Some(seg) => seg.marks.push(c),
                    None => segments.push(Segment::new(c, Slot::Template)),
                }
                continue;
            }
            let seg = match c {
                FIRST_RADICAL_MARKER => Segment::new(root.first(), Slot::Radical(1)),
                SECOND_RADICAL_MARKER => Segment::new(root.second(), Slot::Radical(2)),
                THIRD_RADICAL_MARKER => Segment::new(root.third(), Slot::Radical(3)),
                other => Segment::new(other, Slot::Template),
            };
            segments.push(seg);
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    pub fn remove(&mut self, index: usize) -> Segment {
        self.segments.remove(index)
    }

    /// Index of the first segment filled from the given radical.
    ///
    /// Templates may repeat a slot; rules act on the first occurrence, which
    /// is the one every built-in template has.
    pub fn radical_index(&self, position: u8) -> Option<usize> {
        self.segments
            .iter()
            .position(|s| s.slot == Slot::Radical(position))
    }

    pub fn radical_mut(&mut self, position: u8) -> Option<&mut Segment> {
        let i = self.radical_index(position)?;
        self.segments.get_mut(i)
    }

    /// Letters only, without diacritics.
    pub fn letters(&self) -> String {
        self.segments.iter().map(|s| s.letter).collect()
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            write!(f, "{}{}", seg.letter, seg.marks)?;
        }
        Ok(())
    }
}

/// Substitute a root into a template and render the result.
pub fn substitute(root: &Root, template: &str) -> String {
    Stem::substitute(root, template).to_string()
}
