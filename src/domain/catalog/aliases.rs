//! Catalog Context - 别名表
//!
//! 小写别名 -> 正典书卷名。编译期常量，启动后只读。

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::books::canonical_books;

/// 显式别名（无重音拼写、带尊称前缀的写法）
const EXPLICIT_ALIASES: &[(&str, &str)] = &[
    // Antiguo Testamento
    ("genesis", "Génesis"),
    ("exodo", "Éxodo"),
    ("levitico", "Levítico"),
    ("numeros", "Números"),
    ("deuteronomio", "Deuteronomio"),
    ("josue", "Josué"),
    ("jueces", "Jueces"),
    ("rut", "Rut"),
    ("1 samuel", "1 Samuel"),
    ("2 samuel", "2 Samuel"),
    ("1 reyes", "1 Reyes"),
    ("2 reyes", "2 Reyes"),
    ("1 cronicas", "1 Crónicas"),
    ("2 cronicas", "2 Crónicas"),
    ("esdras", "Esdras"),
    ("nehemias", "Nehemías"),
    ("ester", "Ester"),
    ("job", "Job"),
    ("salmos", "Salmos"),
    ("proverbios", "Proverbios"),
    ("eclesiastes", "Eclesiastés"),
    ("cantares", "Cantares"),
    ("isaias", "Isaías"),
    ("jeremias", "Jeremías"),
    ("lamentaciones", "Lamentaciones"),
    ("ezequiel", "Ezequiel"),
    ("daniel", "Daniel"),
    ("oseas", "Oseas"),
    ("joel", "Joel"),
    ("amos", "Amós"),
    ("abdias", "Abdías"),
    ("jonas", "Jonás"),
    ("miqueas", "Miqueas"),
    ("nahum", "Nahum"),
    ("habacuc", "Habacuc"),
    ("sofonias", "Sofonías"),
    ("hageo", "Hageo"),
    ("zacarias", "Zacarías"),
    ("malaquias", "Malaquías"),
    // Nuevo Testamento
    ("mateo", "Mateo"),
    ("marcos", "Marcos"),
    ("lucas", "Lucas"),
    ("juan", "Juan"),
    ("hechos", "Hechos"),
    ("romanos", "Romanos"),
    ("1 corintios", "1 Corintios"),
    ("2 corintios", "2 Corintios"),
    ("galatas", "Gálatas"),
    ("efesios", "Efesios"),
    ("filipenses", "Filipenses"),
    ("colosenses", "Colosenses"),
    ("1 tesalonicenses", "1 Tesalonicenses"),
    ("2 tesalonicenses", "2 Tesalonicenses"),
    ("1 timoteo", "1 Timoteo"),
    ("2 timoteo", "2 Timoteo"),
    ("tito", "Tito"),
    ("filemon", "Filemón"),
    ("hebreos", "Hebreos"),
    ("santiago", "Santiago"),
    ("1 pedro", "1 Pedro"),
    ("2 pedro", "2 Pedro"),
    ("1 juan", "1 Juan"),
    ("2 juan", "2 Juan"),
    ("3 juan", "3 Juan"),
    ("judas", "Judas"),
    ("apocalipsis", "Apocalipsis"),
    // 尊称前缀
    ("s. juan", "Juan"),
    ("s.juan", "Juan"),
    ("san juan", "Juan"),
    ("s. mateo", "Mateo"),
    ("s.mateo", "Mateo"),
    ("san mateo", "Mateo"),
    ("s. marcos", "Marcos"),
    ("s.marcos", "Marcos"),
    ("san marcos", "Marcos"),
    ("s. lucas", "Lucas"),
    ("s.lucas", "Lucas"),
    ("san lucas", "Lucas"),
    ("s. pedro", "1 Pedro"),
    ("s.pedro", "1 Pedro"),
    ("san pedro", "1 Pedro"),
    ("s. pablo", "Romanos"),
    ("s.pablo", "Romanos"),
    ("san pablo", "Romanos"),
    ("salmo", "Salmos"),
];

lazy_static! {
    static ref ALIAS_TABLE: HashMap<String, &'static str> = {
        let mut table: HashMap<String, &'static str> = canonical_books()
            .map(|book| (book.to_lowercase(), book))
            .collect();
        for (alias, book) in EXPLICIT_ALIASES {
            table.insert((*alias).to_string(), *book);
        }
        table
    };
}

/// 查找别名（输入须已小写）
pub fn lookup_alias(lowercase: &str) -> Option<&'static str> {
    ALIAS_TABLE.get(lowercase).copied()
}

/// 遍历所有别名
pub fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    ALIAS_TABLE.iter().map(|(alias, book)| (alias.as_str(), *book))
}
