//! Chunk and chunk-sequence types.
//!
//! The sequence is backed by an arena of chunks plus index-based adjacency
//! (`prev`/`next`/`parent` are [`ChunkId`]s, not references), so re-tag
//! passes can insert virtual chunks without invalidating anyone's cursor.
//! Source text is never copied into chunks: a chunk carries the byte span it
//! covers and callers slice the original source when they need the spelling.

use cfmt_core::kinds::ChunkKind;

// ============================================================================
// SPANS
// ============================================================================

/// A byte range into the source of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at a position; used by virtual chunks.
    pub fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice the covered text out of the source.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

// ============================================================================
// CHUNKS
// ============================================================================

/// Stable handle to a chunk in its sequence's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkId(u32);

impl ChunkId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One classified lexical unit.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// The single semantic kind; the only field rewritten after creation.
    pub kind: ChunkKind,
    /// Contextual association (sparen owner keyword, comment placement,
    /// `#define` body marker). `ChunkKind::None` when there is none.
    pub parent_kind: ChunkKind,
    pub span: Span,
    pub paren_depth: usize,
    pub brace_depth: usize,
    pub square_depth: usize,
    pub angle_depth: usize,
    /// Non-owning structural link (preprocessor body -> directive chunk).
    pub parent: Option<ChunkId>,
    /// Synthesized chunk with no source text; omitted on re-emission.
    pub is_virtual: bool,
    /// Literal ran into end of input before its closing delimiter.
    pub unterminated: bool,
    /// Part of a preprocessor directive's logical line.
    pub in_preproc: bool,
    prev: Option<ChunkId>,
    next: Option<ChunkId>,
}

impl Chunk {
    pub fn new(kind: ChunkKind, span: Span) -> Self {
        Self {
            kind,
            parent_kind: ChunkKind::None,
            span,
            paren_depth: 0,
            brace_depth: 0,
            square_depth: 0,
            angle_depth: 0,
            parent: None,
            is_virtual: false,
            unterminated: false,
            in_preproc: false,
            prev: None,
            next: None,
        }
    }

    /// A synthesized chunk anchored at a source position.
    pub fn virtual_at(kind: ChunkKind, at: usize) -> Self {
        let mut chunk = Chunk::new(kind, Span::empty(at));
        chunk.is_virtual = true;
        chunk
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

// ============================================================================
// CHUNK SEQUENCE
// ============================================================================

/// The ordered, doubly-traversable sequence of chunks for one source unit.
#[derive(Debug, Default)]
pub struct ChunkSeq {
    arena: Vec<Chunk>,
    head: Option<ChunkId>,
    tail: Option<ChunkId>,
    unbalanced: bool,
}

impl ChunkSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chunks, including virtual ones.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn first(&self) -> Option<ChunkId> {
        self.head
    }

    pub fn last(&self) -> Option<ChunkId> {
        self.tail
    }

    pub fn get(&self, id: ChunkId) -> &Chunk {
        &self.arena[id.index()]
    }

    pub fn get_mut(&mut self, id: ChunkId) -> &mut Chunk {
        &mut self.arena[id.index()]
    }

    pub fn kind(&self, id: ChunkId) -> ChunkKind {
        self.get(id).kind
    }

    /// Rewrite a chunk's kind; re-tagging replaces, it never annotates.
    pub fn set_kind(&mut self, id: ChunkId, kind: ChunkKind) {
        self.get_mut(id).kind = kind;
    }

    pub fn set_parent(&mut self, id: ChunkId, parent: ChunkId) {
        self.get_mut(id).parent = Some(parent);
    }

    pub fn set_parent_kind(&mut self, id: ChunkId, kind: ChunkKind) {
        self.get_mut(id).parent_kind = kind;
    }

    /// Bracket pairing failed somewhere in this unit.
    pub fn unbalanced(&self) -> bool {
        self.unbalanced
    }

    pub fn mark_unbalanced(&mut self) {
        self.unbalanced = true;
    }

    // ========================================================================
    // Structure edits
    // ========================================================================

    /// Append a chunk at the end of the sequence.
    pub fn push(&mut self, chunk: Chunk) -> ChunkId {
        let id = ChunkId(self.arena.len() as u32);
        self.arena.push(chunk);
        self.arena[id.index()].prev = self.tail;
        match self.tail {
            Some(tail) => self.arena[tail.index()].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Splice a chunk in directly after `after`.
    pub fn insert_after(&mut self, after: ChunkId, chunk: Chunk) -> ChunkId {
        let id = ChunkId(self.arena.len() as u32);
        self.arena.push(chunk);
        let old_next = self.arena[after.index()].next;
        self.arena[id.index()].prev = Some(after);
        self.arena[id.index()].next = old_next;
        self.arena[after.index()].next = Some(id);
        match old_next {
            Some(next) => self.arena[next.index()].prev = Some(id),
            None => self.tail = Some(id),
        }
        id
    }

    /// Splice a chunk in directly before `before`.
    pub fn insert_before(&mut self, before: ChunkId, chunk: Chunk) -> ChunkId {
        match self.arena[before.index()].prev {
            Some(prev) => self.insert_after(prev, chunk),
            None => {
                let id = ChunkId(self.arena.len() as u32);
                self.arena.push(chunk);
                self.arena[id.index()].next = Some(before);
                self.arena[before.index()].prev = Some(id);
                self.head = Some(id);
                id
            }
        }
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    pub fn next(&self, id: ChunkId) -> Option<ChunkId> {
        self.get(id).next
    }

    pub fn prev(&self, id: ChunkId) -> Option<ChunkId> {
        self.get(id).prev
    }

    /// The following chunk that is neither layout nor comment.
    pub fn next_code(&self, id: ChunkId) -> Option<ChunkId> {
        let mut cur = self.next(id);
        while let Some(c) = cur {
            if !self.get(c).kind.is_layout() {
                return Some(c);
            }
            cur = self.next(c);
        }
        None
    }

    /// The preceding chunk that is neither layout nor comment.
    pub fn prev_code(&self, id: ChunkId) -> Option<ChunkId> {
        let mut cur = self.prev(id);
        while let Some(c) = cur {
            if !self.get(c).kind.is_layout() {
                return Some(c);
            }
            cur = self.prev(c);
        }
        None
    }

    /// Walk forward to the close chunk pairing with `open`.
    ///
    /// Paren-family kinds share a counter so a plain open can match a close
    /// that a later pass has already refined.
    pub fn matching_close(&self, open: ChunkId) -> Option<ChunkId> {
        let open_kind = self.kind(open);
        let paren_family = open_kind.is_paren_open();
        let close_kind = open_kind.matching_close()?;
        let mut depth = 1usize;
        let mut cur = self.next(open);
        while let Some(id) = cur {
            let kind = self.kind(id);
            let opens = if paren_family { kind.is_paren_open() } else { kind == open_kind };
            let closes = if paren_family { kind.is_paren_close() } else { kind == close_kind };
            if opens {
                depth += 1;
            } else if closes {
                depth -= 1;
                if depth == 0 {
                    return Some(id);
                }
            }
            cur = self.next(id);
        }
        None
    }

    /// The open chunk of the paren group directly enclosing `id`, if any.
    pub fn enclosing_paren(&self, id: ChunkId) -> Option<ChunkId> {
        let depth = self.get(id).paren_depth;
        if depth == 0 {
            return None;
        }
        let mut cur = self.prev(id);
        while let Some(c) = cur {
            let chunk = self.get(c);
            if chunk.kind.is_paren_open() && chunk.paren_depth == depth - 1 {
                return Some(c);
            }
            cur = self.prev(c);
        }
        None
    }

    /// Ids in sequence order; collected so passes can mutate while walking.
    pub fn ids(&self) -> Vec<ChunkId> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut cur = self.head;
        while let Some(id) = cur {
            out.push(id);
            cur = self.next(id);
        }
        out
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Concatenate the source spans of every non-virtual chunk in order.
    ///
    /// For an untouched unit this reproduces the input byte-for-byte.
    pub fn reconstruct(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        let mut cur = self.head;
        while let Some(id) = cur {
            let chunk = self.get(id);
            if !chunk.is_virtual {
                out.push_str(chunk.text(source));
            }
            cur = self.next(id);
        }
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================
