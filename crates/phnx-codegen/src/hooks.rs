//! `hooks.ts` emitter.
//!
//! GET operations only; mutation verbs are deliberately excluded. Each
//! hook wraps one client method in a load/error/data tri-state with a
//! manual `refetch` and an `enabled` flag that suppresses the automatic
//! initial fetch. Overlapping refetches are not deduplicated or
//! cancelled; that limitation is stated in the emitted header.

use crate::document::{Document, Operation};
use crate::names::{hook_name, method_name};

const PRELUDE: &str = r#"// Generated React hooks (minimal, dependency-free).
// For production apps, consider TanStack Query for caching & retries.
// Note: overlapping refetch calls are not deduplicated or cancelled.

import { useEffect, useMemo, useState } from 'react';
import { createClient, type ClientConfig } from './client';

export interface HookState<T> {
  data: T | null;
  error: Error | null;
  loading: boolean;
  refetch: () => Promise<void>;
}

"#;

/// Emit the hooks file.
pub fn emit(doc: &Document) -> String {
    let mut out = String::from(PRELUDE);
    for op in doc.operations.iter().filter(|op| op.method == "GET") {
        push_hook(&mut out, op);
    }
    out
}

fn push_hook(out: &mut String, op: &Operation) {
    let hook = hook_name(op);
    let client_fn = method_name(op);

    out.push_str(&format!("export function {hook}<TResponse = unknown>(\n"));
    out.push_str("  args?: {\n");
    out.push_str("    config?: ClientConfig;\n");
    out.push_str("    path?: Record<string, string | number>;\n");
    out.push_str("    query?: Record<string, string | number | boolean | undefined>;\n");
    out.push_str("    enabled?: boolean;\n");
    out.push_str("  }\n");
    out.push_str("): HookState<TResponse> {\n");
    out.push_str("  const enabled = args?.enabled ?? true;\n");
    out.push_str("  const client = useMemo(() => createClient(args?.config), [args?.config]);\n");
    out.push_str("  const [data, setData] = useState<TResponse | null>(null);\n");
    out.push_str("  const [error, setError] = useState<Error | null>(null);\n");
    out.push_str("  const [loading, setLoading] = useState(false);\n");
    out.push_str("\n");
    out.push_str("  const refetch = async () => {\n");
    out.push_str("    if (!enabled) return;\n");
    out.push_str("    setLoading(true);\n");
    out.push_str("    setError(null);\n");
    out.push_str("    try {\n");
    out.push_str(&format!(
        "      const res = await client.{client_fn}<TResponse>({{ path: args?.path, query: args?.query }});\n"
    ));
    out.push_str("      setData(res);\n");
    out.push_str("    } catch (e) {\n");
    out.push_str("      setError(e as Error);\n");
    out.push_str("    } finally {\n");
    out.push_str("      setLoading(false);\n");
    out.push_str("    }\n");
    out.push_str("  };\n");
    out.push_str("\n");
    out.push_str("  useEffect(() => {\n");
    out.push_str("    void refetch();\n");
    out.push_str("    // eslint-disable-next-line react-hooks/exhaustive-deps\n");
    out.push_str("  }, [enabled]);\n");
    out.push_str("\n");
    out.push_str("  return { data, error, loading, refetch };\n");
    out.push_str("}\n\n");
}
