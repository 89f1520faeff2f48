mod normalize;
mod tree;

use quickcheck::{Arbitrary, Gen};

/// Raw user input: a mix of ASCII, accented letters, punctuation and other scripts.
#[derive(Clone, Debug)]
pub(crate) struct RawWord(pub(crate) String);

impl Arbitrary for RawWord {
    fn arbitrary(g: &mut Gen) -> Self {
        const ALPHABET: &[char] = &[
            'a', 'b', 'C', 'D', '1', '9', 'á', 'Ã', 'é', 'Ê', 'í', 'Ï', 'ó', 'Õ', 'ü', 'Ú', 'ç',
            'Ç', 'ñ', 'ß', '日', ' ', '!', '-', '\'',
        ];
        let len = usize::arbitrary(g) % 8;
        let word = (0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect();
        RawWord(word)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(RawWord))
    }
}
