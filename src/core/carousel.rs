//! Background carousel state

/// Circular slide index; exactly one slide is active at any time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Returns `None` for fewer than two slides, where rotating is pointless
    pub fn new(len: usize) -> Option<Self> {
        (len >= 2).then_some(Self { index: 0, len })
    }

    /// Move to the next slide, wrapping around, and return its index
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, slide: usize) -> bool {
        slide == self.index
    }

    /// Active flag per slide, in slide order
    pub fn active_flags(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|slide| self.is_active(slide))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_two_slides() {
        assert!(Carousel::new(0).is_none());
        assert!(Carousel::new(1).is_none());
        assert!(Carousel::new(2).is_some());
    }

    #[test]
    fn test_cycles_three_slides() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.index(), 0);
        let sequence: Vec<usize> = (0..7).map(|_| carousel.advance()).collect();
        assert_eq!(sequence, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_exactly_one_active() {
        let mut carousel = Carousel::new(3).unwrap();
        for _ in 0..10 {
            let active = carousel.active_flags().filter(|active| *active).count();
            assert_eq!(active, 1);
            assert!(carousel.is_active(carousel.index()));
            carousel.advance();
        }
    }
}
