//! Ordered document type table.

use super::{Detection, TypeEntry};

/// Known document types in lookup order.
///
/// Lookups scan this slice front to back and the first match wins, so the
/// position of an entry decides ties between overlapping extensions (`.h` is
/// claimed by `C` before `Objective C`). Append new entries at their
/// alphabetical position and keep `Text` last.
pub const TYPE_TABLE: &[TypeEntry] = &[
    TypeEntry {
        display_id: "ABAP",
        highlighter_id: "abap",
        detection: Detection::Extensions(&["abap"]),
        mime: "text/x-abap",
    },
    TypeEntry {
        display_id: "ActionScript",
        highlighter_id: "actionscript-3",
        detection: Detection::Extensions(&["as"]),
        mime: "text/x-actionscript",
    },
    TypeEntry {
        display_id: "Ada",
        highlighter_id: "ada",
        detection: Detection::Extensions(&["ada", "adb", "ads"]),
        mime: "text/x-ada",
    },
    TypeEntry {
        display_id: "APL",
        highlighter_id: "apl",
        detection: Detection::Extensions(&["apl"]),
        mime: "text/apl",
    },
    TypeEntry {
        display_id: "AppleScript",
        highlighter_id: "applescript",
        detection: Detection::Extensions(&["applescript"]),
        mime: "text/x-applescript",
    },
    TypeEntry {
        display_id: "AsciiDoc",
        highlighter_id: "asciidoc",
        detection: Detection::Extensions(&["adoc", "asciidoc"]),
        mime: "text/x-asciidoc",
    },
    TypeEntry {
        display_id: "Assembly",
        highlighter_id: "asm",
        detection: Detection::Extensions(&["asm", "s", "S"]),
        mime: "text/x-asm",
    },
    TypeEntry {
        display_id: "Batch File",
        highlighter_id: "bat",
        detection: Detection::Extensions(&["bat", "cmd"]),
        mime: "application/x-msdownload",
    },
    TypeEntry {
        display_id: "Berry",
        highlighter_id: "berry",
        detection: Detection::Extensions(&["be"]),
        mime: "text/x-berry",
    },
    TypeEntry {
        display_id: "BibTex",
        highlighter_id: "bibtex",
        detection: Detection::Extensions(&["bib"]),
        mime: "application/x-bibtex",
    },
    TypeEntry {
        display_id: "C",
        highlighter_id: "c",
        detection: Detection::Extensions(&["c", "h"]),
        mime: "text/x-c",
    },
    TypeEntry {
        display_id: "Clojure",
        highlighter_id: "clojure",
        detection: Detection::Extensions(&["clj", "cljs", "cljc"]),
        mime: "text/x-clojure",
    },
    TypeEntry {
        display_id: "CMake",
        highlighter_id: "cmake",
        detection: Detection::Extensions(&["cmake"]),
        mime: "text/x-cmake",
    },
    TypeEntry {
        display_id: "COBOL",
        highlighter_id: "cobol",
        detection: Detection::Extensions(&["cob", "cbl"]),
        mime: "text/x-cobol",
    },
    TypeEntry {
        display_id: "CoffeeScript",
        highlighter_id: "coffee",
        detection: Detection::Extensions(&["coffee"]),
        mime: "application/vnd.coffeescript",
    },
    TypeEntry {
        display_id: "Common Lisp",
        highlighter_id: "common-lisp",
        detection: Detection::Extensions(&["lisp", "lsp"]),
        mime: "text/x-common-lisp",
    },
    TypeEntry {
        display_id: "Coq",
        highlighter_id: "coq",
        detection: Detection::Extensions(&["v"]),
        mime: "text/x-coq",
    },
    TypeEntry {
        display_id: "C++",
        highlighter_id: "cpp",
        detection: Detection::Extensions(&["cpp", "hpp"]),
        mime: "text/x-c",
    },
    TypeEntry {
        display_id: "Crystal",
        highlighter_id: "crystal",
        detection: Detection::Extensions(&["cr"]),
        mime: "text/x-crystal",
    },
    TypeEntry {
        display_id: "C#",
        highlighter_id: "csharp",
        detection: Detection::Extensions(&["cs"]),
        mime: "text/x-csharp",
    },
    TypeEntry {
        display_id: "CSS",
        highlighter_id: "css",
        detection: Detection::Extensions(&["css"]),
        mime: "text/css",
    },
    TypeEntry {
        display_id: "CSV",
        highlighter_id: "csv",
        detection: Detection::Extensions(&["csv"]),
        mime: "text/csv",
    },
    TypeEntry {
        display_id: "CUE",
        highlighter_id: "cue",
        detection: Detection::Extensions(&["cue"]),
        mime: "application/x-cue",
    },
    TypeEntry {
        display_id: "D",
        highlighter_id: "d",
        detection: Detection::Extensions(&["d", "di"]),
        mime: "text/x-d",
    },
    TypeEntry {
        display_id: "Dart",
        highlighter_id: "dart",
        detection: Detection::Extensions(&["dart"]),
        mime: "application/dart",
    },
    TypeEntry {
        display_id: "Diff",
        highlighter_id: "diff",
        detection: Detection::Extensions(&["diff", "patch"]),
        mime: "text/x-diff",
    },
    TypeEntry {
        display_id: "Dockerfile",
        highlighter_id: "docker",
        detection: Detection::NameSuffix("Dockerfile"),
        mime: "text/x-dockerfile",
    },
    TypeEntry {
        display_id: "Elixir",
        highlighter_id: "elixir",
        detection: Detection::Extensions(&["ex", "exs"]),
        mime: "text/x-elixir",
    },
    TypeEntry {
        display_id: "Elm",
        highlighter_id: "elm",
        detection: Detection::Extensions(&["elm"]),
        mime: "text/x-elm",
    },
    TypeEntry {
        display_id: "Emacs Lisp",
        highlighter_id: "emacs-lisp",
        detection: Detection::Extensions(&["el", "elc"]),
        mime: "application/x-elc",
    },
    TypeEntry {
        display_id: "Erlang",
        highlighter_id: "erlang",
        detection: Detection::Extensions(&["hrl", "erl"]),
        mime: "text/x-erlang",
    },
    TypeEntry {
        display_id: "Fish",
        highlighter_id: "fish",
        detection: Detection::Extensions(&["fish"]),
        mime: "application/x-fish",
    },
    TypeEntry {
        display_id: "F#",
        highlighter_id: "fsharp",
        detection: Detection::Extensions(&["fs", "fsi", "fsx"]),
        mime: "text/x-fsharp",
    },
    TypeEntry {
        display_id: "GDScript",
        highlighter_id: "gdscript",
        detection: Detection::Extensions(&["gd"]),
        mime: "text/x-gdscript",
    },
    TypeEntry {
        display_id: "Gherkin",
        highlighter_id: "gherkin",
        detection: Detection::Extensions(&["feature"]),
        mime: "text/x-gherkin",
    },
    TypeEntry {
        display_id: "Go",
        highlighter_id: "go",
        detection: Detection::Extensions(&["go"]),
        mime: "text/x-go",
    },
    TypeEntry {
        display_id: "Groovy",
        highlighter_id: "groovy",
        detection: Detection::Extensions(&["groovy"]),
        mime: "text/x-groovy",
    },
    TypeEntry {
        display_id: "Hack",
        highlighter_id: "hack",
        detection: Detection::Extensions(&["hack"]),
        mime: "application/x-httpd-php",
    },
    TypeEntry {
        display_id: "Haskell",
        highlighter_id: "haskell",
        detection: Detection::Extensions(&["hs", "lhs"]),
        mime: "text/x-haskell",
    },
    TypeEntry {
        display_id: "Haxe",
        highlighter_id: "haxe",
        detection: Detection::Extensions(&["hx"]),
        mime: "text/x-haxe",
    },
    TypeEntry {
        display_id: "HLSL",
        highlighter_id: "hlsl",
        detection: Detection::Extensions(&["hlsl"]),
        mime: "text/x-hlsl",
    },
    TypeEntry {
        display_id: "HTML",
        highlighter_id: "html",
        detection: Detection::Extensions(&["htm", "html"]),
        mime: "text/html",
    },
    TypeEntry {
        display_id: "HTTP",
        highlighter_id: "http",
        detection: Detection::Extensions(&["http"]),
        mime: "application/http",
    },
    TypeEntry {
        display_id: "Hy",
        highlighter_id: "hy",
        detection: Detection::Extensions(&["hy"]),
        mime: "text/x-hy",
    },
    TypeEntry {
        display_id: "INI",
        highlighter_id: "ini",
        detection: Detection::Extensions(&["ini"]),
        mime: "text/x-ini",
    },
    TypeEntry {
        display_id: "Java",
        highlighter_id: "java",
        detection: Detection::Extensions(&["java"]),
        mime: "text/x-java-source",
    },
    TypeEntry {
        display_id: "JavaScript",
        highlighter_id: "javascript",
        detection: Detection::Extensions(&["js"]),
        mime: "text/javascript",
    },
    TypeEntry {
        display_id: "Jinja",
        highlighter_id: "jinja",
        detection: Detection::Extensions(&["jinja", "jinja2"]),
        mime: "text/x-django",
    },
    TypeEntry {
        display_id: "JSON",
        highlighter_id: "json",
        detection: Detection::Extensions(&["json"]),
        mime: "application/json",
    },
    TypeEntry {
        display_id: "JSON5",
        highlighter_id: "json5",
        detection: Detection::Extensions(&["json", "json5"]),
        mime: "application/json5",
    },
    TypeEntry {
        display_id: "JSON with Comments",
        highlighter_id: "jsonc",
        detection: Detection::Extensions(&["json", "jsonc"]),
        mime: "text/javascript",
    },
    TypeEntry {
        display_id: "JSON Lines",
        highlighter_id: "jsonl",
        detection: Detection::Extensions(&["jsonl"]),
        mime: "application/jsonl",
    },
    TypeEntry {
        display_id: "JSX",
        highlighter_id: "jsx",
        detection: Detection::Extensions(&["jsx"]),
        mime: "text/jsx",
    },
    TypeEntry {
        display_id: "Julia",
        highlighter_id: "julia",
        detection: Detection::Extensions(&["jl"]),
        mime: "text/x-julia",
    },
    TypeEntry {
        display_id: "Kotlin",
        highlighter_id: "kotlin",
        detection: Detection::Extensions(&["kt", "kts"]),
        mime: "text/x-kotlin",
    },
    TypeEntry {
        display_id: "LaTeX",
        highlighter_id: "latex",
        detection: Detection::Extensions(&["tex", "sty", "cls"]),
        mime: "application/x-latex",
    },
    TypeEntry {
        display_id: "Lean 4",
        highlighter_id: "lean",
        detection: Detection::Extensions(&["lean"]),
        mime: "text/x-lean4",
    },
    TypeEntry {
        display_id: "Less",
        highlighter_id: "less",
        detection: Detection::Extensions(&["less"]),
        mime: "text/x-less",
    },
    TypeEntry {
        display_id: "Log",
        highlighter_id: "log",
        detection: Detection::Extensions(&["log"]),
        mime: "text/x-log",
    },
    TypeEntry {
        display_id: "Lua",
        highlighter_id: "lua",
        detection: Detection::Extensions(&["lua"]),
        mime: "text/x-lua",
    },
    TypeEntry {
        display_id: "Luau",
        highlighter_id: "luau",
        detection: Detection::Extensions(&["luau"]),
        mime: "text/x-lua",
    },
    TypeEntry {
        display_id: "Makefile",
        highlighter_id: "makefile",
        detection: Detection::NameSuffix("Makefile"),
        mime: "text/x-makefile",
    },
    TypeEntry {
        display_id: "Markdown",
        highlighter_id: "markdown",
        detection: Detection::Extensions(&[
            "md",
            "markdown",
            "mdown",
            "mkdn",
            "mkd",
            "mdtxt",
            "mdtext",
        ]),
        mime: "text/markdown",
    },
    TypeEntry {
        display_id: "MATLAB",
        highlighter_id: "matlab",
        detection: Detection::Extensions(&["m", "mat", "mlx"]),
        mime: "text/x-matlab",
    },
    TypeEntry {
        display_id: "MDX",
        highlighter_id: "mdx",
        detection: Detection::Extensions(&["mdx"]),
        mime: "text/x-gfm",
    },
    TypeEntry {
        display_id: "Mojo",
        highlighter_id: "mojo",
        detection: Detection::Extensions(&["mojo"]),
        mime: "text/x-mojo",
    },
    TypeEntry {
        display_id: "Nginx",
        highlighter_id: "nginx",
        detection: Detection::Extensions(&["nginx.conf"]),
        mime: "text/x-nginx-conf",
    },
    TypeEntry {
        display_id: "Nim",
        highlighter_id: "nim",
        detection: Detection::Extensions(&["nim"]),
        mime: "text/x-nim",
    },
    TypeEntry {
        display_id: "Nushell",
        highlighter_id: "nushell",
        detection: Detection::Extensions(&["nu"]),
        mime: "text/x-sh",
    },
    TypeEntry {
        display_id: "Objective C",
        highlighter_id: "objective-c",
        detection: Detection::Extensions(&["m", "h"]),
        mime: "text/x-objective-c",
    },
    TypeEntry {
        display_id: "Objective C++",
        highlighter_id: "objective-cpp",
        detection: Detection::Extensions(&["mm", "h"]),
        mime: "text/x-objective-c++",
    },
    TypeEntry {
        display_id: "OCaml",
        highlighter_id: "ocaml",
        detection: Detection::Extensions(&["ml", "mli"]),
        mime: "text/x-ocaml",
    },
    TypeEntry {
        display_id: "Pascal",
        highlighter_id: "pascal",
        detection: Detection::Extensions(&["pas", "pp", "p", "inc", "dpr"]),
        mime: "text/x-pascal",
    },
    TypeEntry {
        display_id: "Perl",
        highlighter_id: "perl",
        detection: Detection::Extensions(&["pl", "pm"]),
        mime: "text/x-perl",
    },
    TypeEntry {
        display_id: "PHP",
        highlighter_id: "php",
        detection: Detection::Extensions(&["php", "php3", "php4", "php5"]),
        mime: "text/x-php",
    },
    TypeEntry {
        display_id: "Gettext PO",
        highlighter_id: "po",
        detection: Detection::Extensions(&["po", "pot"]),
        mime: "text/x-gettext",
    },
    TypeEntry {
        display_id: "PostCSS",
        highlighter_id: "postcss",
        detection: Detection::Extensions(&["pcss", "postcss"]),
        mime: "text/css",
    },
    TypeEntry {
        display_id: "PowerShell",
        highlighter_id: "powershell",
        detection: Detection::Extensions(&["ps1", "psm1", "psd1"]),
        mime: "application/x-powershell",
    },
    TypeEntry {
        display_id: "Prolog",
        highlighter_id: "prolog",
        detection: Detection::Extensions(&["pl", "pro", "P"]),
        mime: "text/x-prolog",
    },
    TypeEntry {
        display_id: "Protocol Buffer 3",
        highlighter_id: "proto",
        detection: Detection::Extensions(&["proto"]),
        mime: "text/x-protobuf",
    },
    TypeEntry {
        display_id: "Pug",
        highlighter_id: "pug",
        detection: Detection::Extensions(&["pug", "jade"]),
        mime: "text/x-pug",
    },
    TypeEntry {
        display_id: "Puppet",
        highlighter_id: "puppet",
        detection: Detection::Extensions(&["pp"]),
        mime: "text/x-puppet",
    },
    TypeEntry {
        display_id: "PureScript",
        highlighter_id: "purescript",
        detection: Detection::Extensions(&["purs"]),
        mime: "text/x-haskell",
    },
    TypeEntry {
        display_id: "Python",
        highlighter_id: "python",
        detection: Detection::Extensions(&["py", "pyi"]),
        mime: "text/x-python",
    },
    TypeEntry {
        display_id: "QML",
        highlighter_id: "qml",
        detection: Detection::Extensions(&["qml"]),
        mime: "application/x-qml",
    },
    TypeEntry {
        display_id: "R",
        highlighter_id: "r",
        detection: Detection::Extensions(&["r", "rds", "RData"]),
        mime: "text/x-rsrc",
    },
    TypeEntry {
        display_id: "Racket",
        highlighter_id: "racket",
        detection: Detection::Extensions(&["rkt"]),
        mime: "text/x-racket",
    },
    TypeEntry {
        display_id: "Raku",
        highlighter_id: "raku",
        detection: Detection::Extensions(&["raku", "rak", "p6", "pm"]),
        mime: "text/x-perl",
    },
    TypeEntry {
        display_id: "RegExp",
        highlighter_id: "regexp",
        detection: Detection::Extensions(&["regex", "regexp"]),
        mime: "text/x-regex",
    },
    TypeEntry {
        display_id: "ReStructuredText",
        highlighter_id: "rst",
        detection: Detection::Extensions(&["rst", "rest"]),
        mime: "text/x-rst",
    },
    TypeEntry {
        display_id: "Ruby",
        highlighter_id: "ruby",
        detection: Detection::Extensions(&["rb"]),
        mime: "text/x-ruby",
    },
    TypeEntry {
        display_id: "Rust",
        highlighter_id: "rust",
        detection: Detection::Extensions(&["rs"]),
        mime: "text/x-rust",
    },
    TypeEntry {
        display_id: "SAS",
        highlighter_id: "sas",
        detection: Detection::Extensions(&["sas"]),
        mime: "application/x-sas",
    },
    TypeEntry {
        display_id: "Sass",
        highlighter_id: "sass",
        detection: Detection::Extensions(&["sass"]),
        mime: "text/x-sass",
    },
    TypeEntry {
        display_id: "Scala",
        highlighter_id: "scala",
        detection: Detection::Extensions(&["scala"]),
        mime: "text/x-scala",
    },
    TypeEntry {
        display_id: "Scheme",
        highlighter_id: "scheme",
        detection: Detection::Extensions(&["scm"]),
        mime: "text/x-scheme",
    },
    TypeEntry {
        display_id: "SCSS",
        highlighter_id: "scss",
        detection: Detection::Extensions(&["scss"]),
        mime: "text/x-scss",
    },
    TypeEntry {
        display_id: "Shell",
        highlighter_id: "shellscript",
        detection: Detection::Extensions(&["sh", "bash"]),
        mime: "application/x-sh",
    },
    TypeEntry {
        display_id: "Smalltalk",
        highlighter_id: "smalltalk",
        detection: Detection::Extensions(&["st"]),
        mime: "text/x-stsrc",
    },
    TypeEntry {
        display_id: "Closure Templates",
        highlighter_id: "soy",
        detection: Detection::Extensions(&["soy"]),
        mime: "text/x-soy",
    },
    TypeEntry {
        display_id: "SPARQL",
        highlighter_id: "sparql",
        detection: Detection::Extensions(&["sparql", "rq"]),
        mime: "application/sparql-query",
    },
    TypeEntry {
        display_id: "SQL",
        highlighter_id: "sql",
        detection: Detection::Extensions(&["sql"]),
        mime: "text/x-sql",
    },
    TypeEntry {
        display_id: "Svelte",
        highlighter_id: "svelte",
        detection: Detection::Extensions(&["svelte"]),
        mime: "text/x-svelte",
    },
    TypeEntry {
        display_id: "Swift",
        highlighter_id: "swift",
        detection: Detection::Extensions(&["swift", "playground"]),
        mime: "text/x-swift",
    },
    TypeEntry {
        display_id: "SystemVerilog",
        highlighter_id: "system-verilog",
        detection: Detection::Extensions(&["sv"]),
        mime: "text/x-verilog",
    },
    TypeEntry {
        display_id: "Terraform",
        highlighter_id: "terraform",
        detection: Detection::Extensions(&["tf", "tfvars"]),
        mime: "application/x-terraform",
    },
    TypeEntry {
        display_id: "TeX",
        highlighter_id: "tex",
        detection: Detection::Extensions(&["tex"]),
        mime: "application/x-tex",
    },
    TypeEntry {
        display_id: "TOML",
        highlighter_id: "toml",
        detection: Detection::Extensions(&["toml"]),
        mime: "text/x-toml",
    },
    TypeEntry {
        display_id: "TSV",
        highlighter_id: "tsv",
        detection: Detection::Extensions(&["tsv"]),
        mime: "text/tab-separated-values",
    },
    TypeEntry {
        display_id: "TSX",
        highlighter_id: "tsx",
        detection: Detection::Extensions(&["tsx"]),
        mime: "text/typescript-tsx",
    },
    TypeEntry {
        display_id: "Turtle",
        highlighter_id: "turtle",
        detection: Detection::Extensions(&["ttl"]),
        mime: "text/turtle",
    },
    TypeEntry {
        display_id: "Twig",
        highlighter_id: "twig",
        detection: Detection::Extensions(&["twig"]),
        mime: "text/x-twig",
    },
    TypeEntry {
        display_id: "TypeScript",
        highlighter_id: "typescript",
        detection: Detection::Extensions(&["ts"]),
        mime: "text/x-typescript",
    },
    TypeEntry {
        display_id: "TypeSpec",
        highlighter_id: "typespec",
        detection: Detection::Extensions(&["tsp"]),
        mime: "text/x-tsp",
    },
    TypeEntry {
        display_id: "Typst",
        highlighter_id: "typst",
        detection: Detection::Extensions(&["typ"]),
        mime: "text/x-typst",
    },
    TypeEntry {
        display_id: "Vala",
        highlighter_id: "vala",
        detection: Detection::Extensions(&["vala"]),
        mime: "text/x-vala",
    },
    TypeEntry {
        display_id: "Visual Basic",
        highlighter_id: "vb",
        detection: Detection::Extensions(&["vb", "vbs"]),
        mime: "text/x-vbasic",
    },
    TypeEntry {
        display_id: "Verilog",
        highlighter_id: "verilog",
        detection: Detection::Extensions(&["v"]),
        mime: "text/x-verilog",
    },
    TypeEntry {
        display_id: "VHDL",
        highlighter_id: "vhdl",
        detection: Detection::Extensions(&["vhdl", "vhd"]),
        mime: "text/x-vhdl",
    },
    TypeEntry {
        display_id: "Vim Script",
        highlighter_id: "viml",
        detection: Detection::Extensions(&["vim"]),
        mime: "text/x-vim",
    },
    TypeEntry {
        display_id: "WebAssembly",
        highlighter_id: "wasm",
        detection: Detection::Extensions(&["wasm", "mat"]),
        mime: "application/wasm",
    },
    TypeEntry {
        display_id: "WGSL",
        highlighter_id: "wgsl",
        detection: Detection::Extensions(&["wgsl"]),
        mime: "text/wgsl",
    },
    TypeEntry {
        display_id: "WebAssembly Interface Types",
        highlighter_id: "wit",
        detection: Detection::Extensions(&["wit"]),
        mime: "text/x-webidl",
    },
    TypeEntry {
        display_id: "XML",
        highlighter_id: "xml",
        detection: Detection::Extensions(&["xml", "xsl", "xslt", "xsd", "svg", "rss"]),
        mime: "application/xml",
    },
    TypeEntry {
        display_id: "XSL",
        highlighter_id: "xsl",
        detection: Detection::Extensions(&["xsl"]),
        mime: "application/xml",
    },
    TypeEntry {
        display_id: "YAML",
        highlighter_id: "yaml",
        detection: Detection::Extensions(&["yaml", "yml"]),
        mime: "application/yaml",
    },
    TypeEntry {
        display_id: "Zig",
        highlighter_id: "zig",
        detection: Detection::Extensions(&["zig"]),
        mime: "text/zig",
    },
    TypeEntry {
        display_id: "Text",
        highlighter_id: "txt",
        detection: Detection::Extensions(&["txt", "text"]),
        mime: "text/plain",
    },
];
