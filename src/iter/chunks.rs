pub struct Chunks<T: Copy, I: Iterator<Item = T>> {
    source: I,
    size: usize,
}

impl<T: Copy, I: Iterator<Item = T>> Chunks<T, I> {
    pub fn new(source: I, size: usize) -> Chunks<T, I> {
        Self { source, size }
    }
}

impl<T: Copy, I: Iterator<Item = T>> Iterator for Chunks<T, I> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let buf: Vec<T> = self.source.by_ref().take(self.size).collect();
        if buf.is_empty() { None } else { Some(buf) }
    }
}
