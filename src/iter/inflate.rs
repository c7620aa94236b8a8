pub struct Inflate<T: Copy, I: Iterator<Item = T>> {
    source: I,
    factor: usize,
    current: Option<T>,
    remaining: usize,
}

impl<T: Copy, I: Iterator<Item = T>> Inflate<T, I> {
    pub fn new(source: I, factor: usize) -> Inflate<T, I> {
        Self {
            source,
            factor,
            current: None,
            remaining: 0,
        }
    }
}

impl<T: Copy, I: Iterator<Item = T>> Iterator for Inflate<T, I> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.factor == 0 {
            return None;
        }
        if self.remaining == 0 {
            self.current = Some(self.source.next()?);
            self.remaining = self.factor;
        }
        self.remaining -= 1;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use crate::iter::Iter;

    #[test]
    fn inflate() {
        let held: Vec<i8> = [1i8, -1, 0].into_iter().inflate(3).collect();
        assert_eq!(held, [1, 1, 1, -1, -1, -1, 0, 0, 0]);
    }

    #[test]
    fn inflate_by_one_is_identity() {
        let same: Vec<usize> = (0..10).inflate(1).collect();
        assert_eq!(same, (0..10).collect::<Vec<_>>());
    }
}
