//! `adapters.ts` emitter: a static identity-mapping stub for callers to
//! grow their own DTO-to-view-model mappings in.

/// Emit the adapter placeholder file.
pub fn emit() -> String {
    [
        "// Generated adapters (placeholder).",
        "// Use this file to map server DTOs to client-friendly shapes.",
        "",
        "export type Adapter<TIn, TOut> = (input: TIn) => TOut;",
        "",
        "export function identity<T>(value: T): T {",
        "  return value;",
        "}",
        "",
    ]
    .join("\n")
}
