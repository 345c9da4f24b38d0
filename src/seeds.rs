//! Built-in content: the category registry and the problem cards shipped with the catalogue.

use crate::domain::{
  Category, CategoryRegistry, Difficulty, NormalProblem, Problem, QuizProblem, TestCase,
};

/// Sidebar registry known at startup. No categories are created at runtime.
pub fn category_registry() -> CategoryRegistry {
  CategoryRegistry {
    main: vec![
      Category::new("big-o", "Big O Notation"),
      Category::new("recursion", "Recursion"),
      Category::new("arrays", "Arrays"),
      Category::new("strings", "Strings"),
      Category::new("sorting", "Sorting"),
      Category::new("css", "CSS"),
      Category::new("javascript-quiz", "JavaScript Quiz"),
    ],
    architecture: vec![
      Category::new("architecture-solid", "SOLID Principles"),
      Category::new("architecture-patterns", "Design Patterns"),
    ],
    nodejs: vec![
      Category::new("nodejs-event-loop", "Event Loop"),
      Category::new("nodejs-streams", "Streams"),
    ],
  }
}

fn tc(input: &str, output: &str) -> TestCase {
  TestCase { input: input.into(), output: output.into() }
}

#[allow(clippy::too_many_arguments)]
fn normal(
  id: &str,
  category: &str,
  title: &str,
  difficulty: Difficulty,
  description: &str,
  solution: &str,
  explanation: Option<&str>,
  test_cases: Vec<TestCase>,
) -> Problem {
  Problem::Normal(NormalProblem {
    id: id.into(),
    title: title.into(),
    category: category.into(),
    test_cases,
    description: description.into(),
    difficulty,
    solution: solution.into(),
    explanation: explanation.map(Into::into),
  })
}

fn quiz(id: &str, category: &str, title: &str, question: &str) -> Problem {
  Problem::Quiz(QuizProblem {
    id: id.into(),
    title: title.into(),
    category: category.into(),
    test_cases: vec![],
    question: question.into(),
  })
}

/// Problems shipped with the catalogue, in display order within each category.
pub fn seed_problems() -> Vec<Problem> {
  use Difficulty::*;
  vec![
    // big-o
    normal(
      "big-o-1", "big-o", "O(1) - Constant Time", Easy,
      "Return the first element of an array regardless of its size.",
      "function getFirst(arr) {\n  return arr[0];\n}",
      Some("A single index lookup does not depend on the input length."),
      vec![tc("[5, 1, 9]", "5")],
    ),
    normal(
      "big-o-2", "big-o", "O(n) - Linear Search", Easy,
      "Find the index of a target value by scanning the array once.",
      "function linearSearch(arr, target) {\n  for (let i = 0; i < arr.length; i++) {\n    if (arr[i] === target) return i;\n  }\n  return -1;\n}",
      Some("Worst case visits every element once."),
      vec![tc("[4, 2, 7], 7", "2"), tc("[4, 2, 7], 3", "-1")],
    ),
    normal(
      "big-o-3", "big-o", "O(log n) - Binary Search", Medium,
      "Find a target in a sorted array by halving the search range.",
      "function binarySearch(arr, target) {\n  let lo = 0, hi = arr.length - 1;\n  while (lo <= hi) {\n    const mid = (lo + hi) >> 1;\n    if (arr[mid] === target) return mid;\n    if (arr[mid] < target) lo = mid + 1; else hi = mid - 1;\n  }\n  return -1;\n}",
      Some("Each step discards half of the remaining range."),
      vec![tc("[1, 3, 5, 7, 9], 7", "3")],
    ),
    normal(
      "big-o-4", "big-o", "O(2^n) - Fibonacci Recursive", Medium,
      "Compute the nth Fibonacci number with naive recursion.",
      "function fib(n) {\n  if (n <= 1) return n;\n  return fib(n - 1) + fib(n - 2);\n}",
      Some("Every call branches twice, so the call tree doubles with each level."),
      vec![tc("10", "55")],
    ),
    // recursion
    normal(
      "recursion-1", "recursion", "Factorial", Easy,
      "Return n! for a non-negative integer n.",
      "function factorial(n) {\n  return n <= 1 ? 1 : n * factorial(n - 1);\n}",
      None,
      vec![tc("5", "120"), tc("0", "1")],
    ),
    normal(
      "recursion-2", "recursion", "Memoized Sequence", Medium,
      "Compute the nth FIBONACCI number, caching intermediate results.",
      "function fibMemo(n, memo = {}) {\n  if (n <= 1) return n;\n  if (memo[n]) return memo[n];\n  return (memo[n] = fibMemo(n - 1, memo) + fibMemo(n - 2, memo));\n}",
      Some("Each subproblem is solved once, giving O(n) time."),
      vec![tc("50", "12586269025")],
    ),
    normal(
      "recursion-3", "recursion", "Flatten Nested Array", Medium,
      "Flatten an arbitrarily nested array into a single level.",
      "function flatten(arr) {\n  return arr.reduce((acc, x) => acc.concat(Array.isArray(x) ? flatten(x) : x), []);\n}",
      None,
      vec![tc("[1, [2, [3, [4]]]]", "[1, 2, 3, 4]")],
    ),
    // arrays
    normal(
      "arrays-1", "arrays", "Two Sum", Easy,
      "Return the indices of the two numbers that add up to the target.",
      "function twoSum(nums, target) {\n  const seen = new Map();\n  for (let i = 0; i < nums.length; i++) {\n    if (seen.has(target - nums[i])) return [seen.get(target - nums[i]), i];\n    seen.set(nums[i], i);\n  }\n  return [];\n}",
      None,
      vec![tc("[2, 7, 11, 15], 9", "[0, 1]")],
    ),
    normal(
      "arrays-2", "arrays", "Maximum Subarray", Hard,
      "Find the contiguous subarray with the largest sum.",
      "function maxSubArray(nums) {\n  let best = nums[0], cur = nums[0];\n  for (const n of nums.slice(1)) {\n    cur = Math.max(n, cur + n);\n    best = Math.max(best, cur);\n  }\n  return best;\n}",
      Some("Kadane's algorithm keeps the best sum ending at each position."),
      vec![tc("[-2, 1, -3, 4, -1, 2, 1, -5, 4]", "6")],
    ),
    // strings
    normal(
      "strings-1", "strings", "Reverse a String", Easy,
      "Return the characters of a string in reverse order.",
      "function reverse(s) {\n  return [...s].reverse().join('');\n}",
      None,
      vec![tc("\"hello\"", "\"olleh\"")],
    ),
    normal(
      "strings-2", "strings", "Valid Palindrome", Easy,
      "Check whether a string reads the same forwards and backwards, ignoring non-alphanumerics.",
      "function isPalindrome(s) {\n  const t = s.toLowerCase().replace(/[^a-z0-9]/g, '');\n  return t === [...t].reverse().join('');\n}",
      None,
      vec![tc("\"A man, a plan, a canal: Panama\"", "true")],
    ),
    // sorting
    normal(
      "sorting-1", "sorting", "Bubble Sort", Easy,
      "Sort an array by repeatedly swapping adjacent out-of-order elements.",
      "function bubbleSort(arr) {\n  for (let i = 0; i < arr.length; i++)\n    for (let j = 0; j < arr.length - i - 1; j++)\n      if (arr[j] > arr[j + 1]) [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];\n  return arr;\n}",
      None,
      vec![tc("[3, 1, 2]", "[1, 2, 3]")],
    ),
    normal(
      "sorting-2", "sorting", "Merge Sort", Medium,
      "Sort an array by splitting it in halves and merging the sorted halves.",
      "function mergeSort(arr) {\n  if (arr.length < 2) return arr;\n  const mid = arr.length >> 1;\n  const l = mergeSort(arr.slice(0, mid)), r = mergeSort(arr.slice(mid));\n  const out = [];\n  while (l.length && r.length) out.push(l[0] <= r[0] ? l.shift() : r.shift());\n  return out.concat(l, r);\n}",
      Some("O(n log n) in every case."),
      vec![tc("[5, 2, 4, 1]", "[1, 2, 4, 5]")],
    ),
    // css
    normal(
      "css-1", "css", "Center a Div", Easy,
      "Center a child element horizontally and vertically inside its parent.",
      ".parent {\n  display: flex;\n  justify-content: center;\n  align-items: center;\n}",
      None,
      vec![],
    ),
    // javascript-quiz
    quiz(
      "js-quiz-1", "javascript-quiz", "typeof null",
      "What does `typeof null` evaluate to, and why?",
    ),
    quiz(
      "js-quiz-2", "javascript-quiz", "Hoisting",
      "What is logged by `console.log(x); var x = 5;` and what changes if `let` is used?",
    ),
    // architecture
    quiz(
      "solid-1", "architecture-solid", "Single Responsibility",
      "Explain the Single Responsibility Principle with an example of a class that violates it.",
    ),
    normal(
      "patterns-1", "architecture-patterns", "Singleton", Medium,
      "Implement a class that only ever has one instance.",
      "class Config {\n  static #instance;\n  static get() {\n    return (Config.#instance ??= new Config());\n  }\n}",
      None,
      vec![],
    ),
    // nodejs
    quiz(
      "node-loop-1", "nodejs-event-loop", "Microtasks vs Macrotasks",
      "In what order do `setTimeout`, `setImmediate`, and `process.nextTick` callbacks run?",
    ),
    quiz(
      "node-streams-1", "nodejs-streams", "Backpressure",
      "What is backpressure in Node.js streams and how does `pipe()` handle it?",
    ),
  ]
}
