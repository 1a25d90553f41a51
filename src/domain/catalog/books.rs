//! Catalog Context - 正典书卷目录
//!
//! Reina-Valera 1960 的 66 卷书，按正典顺序排列

use serde::Serialize;

/// 旧约书卷（正典顺序）
pub const OLD_TESTAMENT: [&str; 39] = [
    "Génesis",
    "Éxodo",
    "Levítico",
    "Números",
    "Deuteronomio",
    "Josué",
    "Jueces",
    "Rut",
    "1 Samuel",
    "2 Samuel",
    "1 Reyes",
    "2 Reyes",
    "1 Crónicas",
    "2 Crónicas",
    "Esdras",
    "Nehemías",
    "Ester",
    "Job",
    "Salmos",
    "Proverbios",
    "Eclesiastés",
    "Cantares",
    "Isaías",
    "Jeremías",
    "Lamentaciones",
    "Ezequiel",
    "Daniel",
    "Oseas",
    "Joel",
    "Amós",
    "Abdías",
    "Jonás",
    "Miqueas",
    "Nahum",
    "Habacuc",
    "Sofonías",
    "Hageo",
    "Zacarías",
    "Malaquías",
];

/// 新约书卷（正典顺序）
pub const NEW_TESTAMENT: [&str; 27] = [
    "Mateo",
    "Marcos",
    "Lucas",
    "Juan",
    "Hechos",
    "Romanos",
    "1 Corintios",
    "2 Corintios",
    "Gálatas",
    "Efesios",
    "Filipenses",
    "Colosenses",
    "1 Tesalonicenses",
    "2 Tesalonicenses",
    "1 Timoteo",
    "2 Timoteo",
    "Tito",
    "Filemón",
    "Hebreos",
    "Santiago",
    "1 Pedro",
    "2 Pedro",
    "1 Juan",
    "2 Juan",
    "3 Juan",
    "Judas",
    "Apocalipsis",
];

/// 约别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// 所有约别（正典顺序）
    pub const ALL: [Testament; 2] = [Testament::Old, Testament::New];

    /// 分组名称
    pub fn label(&self) -> &'static str {
        match self {
            Testament::Old => "Antiguo Testamento",
            Testament::New => "Nuevo Testamento",
        }
    }

    /// 该约别下的书卷
    pub fn books(&self) -> &'static [&'static str] {
        match self {
            Testament::Old => &OLD_TESTAMENT,
            Testament::New => &NEW_TESTAMENT,
        }
    }
}

impl std::fmt::Display for Testament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 按正典顺序遍历全部书卷
pub fn canonical_books() -> impl Iterator<Item = &'static str> + Clone {
    OLD_TESTAMENT.iter().chain(NEW_TESTAMENT.iter()).copied()
}

/// 是否为正典书卷名（精确拼写）
pub fn is_canonical(name: &str) -> bool {
    canonical_books().any(|book| book == name)
}
